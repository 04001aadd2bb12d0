//! Contact form command.

use anyhow::{Context as _, Result};
use storefront_commerce::contact::ContactForm;

use super::ContactArgs;
use crate::context::Context;

/// Run the contact command.
pub fn run(args: ContactArgs, ctx: &Context) -> Result<()> {
    let form = ContactForm {
        name: args.name,
        email: args.email,
        subject: args.subject,
        message: args.message,
    };
    let shop = ctx.open_storefront();
    shop.submit_contact(&form).context("Message not sent")?;
    Ok(())
}
