use crate::{config::Config, logger::Logger, portal::PortalHandle, ui::components::overlay::BoxedOverlay};

/// Shared services handed to components explicitly.
///
/// The portal handle is the whole registry surface a component sees; nothing
/// resolves the host ambiently.
pub struct AppContext {
    pub portal: PortalHandle<BoxedOverlay>,
    pub logger: Logger,
    pub config: Config,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        Self {
            portal: PortalHandle::new(),
            logger: Logger::new(),
            config,
        }
    }
}
