pub mod router;
pub mod login_viewmodel;
pub mod donation_viewmodel;
pub mod donation_form_viewmodel;
pub mod resource_viewmodel;

pub use router::{NavOutcome, Router, ACCESS_DENIED_MESSAGE};
pub use login_viewmodel::LoginViewModel;
pub use donation_viewmodel::{ActionError, DonationAction, DonationDetail, DonationViewModel};
pub use donation_form_viewmodel::{DonationForm, DonationFormViewModel, FormError};
pub use resource_viewmodel::ResourceViewModel;
