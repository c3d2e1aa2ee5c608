pub mod downloads;
pub mod filter;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod sensors;
pub mod skills;
pub mod typing;

pub use downloads::{DownloadAck, DownloadCounter};
pub use filter::{CardInfo, ProjectFilter};
pub use modal::{DeferredChart, ModalController, ModalRender, ToggleSide};
pub use nav::{NavController, SectionOffset};
pub use reveal::ScrollReveal;
pub use sensors::{SensorReadings, SensorSim, SensorStatus};
pub use typing::{TypingAnimator, TypingTick};
