use super::sensitivity::Sensitivity;
use core::cell::Cell;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

#[derive(Debug, Default, Copy, Clone)]
struct Request {
    running: bool,
    sensitivity: Option<Sensitivity>,
}

/// Shared handle for a running polling loop.
///
/// The loop owns the driver, so stopping it and changing the sensitivity while
/// it runs go through this handle. Both take effect once the read in flight has
/// been delivered.
pub struct PollingControl<M: RawMutex> {
    request: Mutex<M, Cell<Request>>,
}

impl<M: RawMutex> PollingControl<M> {
    pub const fn new() -> Self {
        Self {
            request: Mutex::new(Cell::new(Request {
                running: false,
                sensitivity: None,
            })),
        }
    }

    /// Asks the loop to exit after delivering the current reading.
    pub fn stop_polling(&self) {
        self.update(|r| r.running = false);
    }

    /// Asks the loop to switch range before its next read.
    pub fn set_sensitivity(&self, sensitivity: Sensitivity) {
        self.update(|r| r.sensitivity = Some(sensitivity));
    }

    pub fn is_polling(&self) -> bool {
        self.request.lock(|r| r.get().running)
    }

    pub(crate) fn begin(&self) {
        self.update(|r| r.running = true);
    }

    pub(crate) fn end(&self) {
        self.stop_polling();
    }

    pub(crate) fn take_sensitivity(&self) -> Option<Sensitivity> {
        self.request.lock(|r| {
            let mut request = r.get();
            let sensitivity = request.sensitivity.take();
            r.set(request);
            sensitivity
        })
    }

    fn update(&self, f: impl FnOnce(&mut Request)) {
        self.request.lock(|r| {
            let mut request = r.get();
            f(&mut request);
            r.set(request);
        })
    }
}

impl<M: RawMutex> Default for PollingControl<M> {
    fn default() -> Self {
        Self::new()
    }
}
