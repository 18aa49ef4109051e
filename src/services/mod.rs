pub mod admin_service;
pub mod auth_service;
pub mod quiz_builder;
pub mod quiz_session;
pub mod student_service;
pub mod teacher_service;

pub use admin_service::AdminService;
pub use auth_service::AuthService;
pub use quiz_builder::{DraftQuestion, QuizDraft};
pub use quiz_session::{QuizSession, SessionState, SubmitOutcome, SubmitTicket};
pub use student_service::StudentDashboard;
pub use teacher_service::TeacherService;
