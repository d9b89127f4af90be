//! Resend command arguments

use clap::Parser;

use super::common::OutputFormat;
use crate::api::programs::DeliveryChannel;

/// Arguments for 'resend' command
#[derive(Parser, Debug)]
pub struct ResendArgs {
    /// Program access code to send
    pub access_code: String,

    /// Client ID
    #[arg(short, long)]
    pub client: String,

    /// Delivery channel
    #[arg(long, value_enum, default_value_t = DeliveryChannel::Email)]
    pub via: DeliveryChannel,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
