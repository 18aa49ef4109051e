pub mod department;
pub mod quiz;
pub mod quiz_result;
pub mod role;
pub mod user;
pub use department::Department;
pub use quiz::{OptionKey, Question, Quiz, QuizOption};
pub use quiz_result::{QuizResult, ResultDetail};
pub use role::Role;
pub use user::{Profile, Session};
