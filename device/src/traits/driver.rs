/// Capability interface every sensor driver implements.
///
/// `start` brings a device from power-up to a state where its commands can be
/// issued. Bus and delay are handed over to the driver and owned by it.
pub trait Driver<B, D>: Sized {
    type Error;

    /// Identifier the driver is registered under.
    const NAME: &'static str;

    /// Names of the operations the driver offers once started.
    const COMMANDS: &'static [&'static str];

    async fn start(bus: B, delay: D) -> Result<Self, Self::Error>;

    fn commands(&self) -> &'static [&'static str] {
        Self::COMMANDS
    }
}
