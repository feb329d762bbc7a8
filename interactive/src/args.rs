use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Frame width in pixels
    #[arg(long, default_value_t = 256)]
    pub width: u32,
    /// Frame height in pixels
    #[arg(long, default_value_t = 256)]
    pub height: u32,
}
