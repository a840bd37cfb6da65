// ============================================================================
// STATE MODULE - Estado compartido con Rc<RefCell>
// ============================================================================

pub mod session_state;
pub mod page;
pub mod access_policy;
pub mod sequencer;
pub mod dialog_state;
pub mod app_state;

pub use session_state::*;
pub use page::Page;
pub use access_policy::AccessPolicy;
pub use sequencer::{RequestSequencer, RequestTicket};
pub use dialog_state::DialogSlot;
pub use app_state::AppState;
