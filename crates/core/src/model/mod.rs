mod ids;
mod progress;
mod user;

pub use ids::{IdError, RoadmapId, UserId};
pub use progress::{Percentage, PercentageError, ProgressRecord};
pub use user::{DailyTime, DreamJob, EmailAddress, Profile, SignupDraft, SignupError, ValidSignup};
