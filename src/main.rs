//! quiz-link command line client.
//!
//! # Usage
//!
//! ```bash
//! quiz-link login -e ada@example.com -p secret
//! quiz-link student pending
//! quiz-link student take <assignment-id>
//! quiz-link teacher create quiz.json
//! quiz-link admin add-teacher -n "Grace" -e grace@example.com -p secret1 -d <department-id>
//! ```

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use quiz_link_client::{
    app_state::AppState,
    auth::{navigate, Navigation, Route},
    config::Config,
    errors::{AppError, AppResult},
    models::{
        domain::{OptionKey, QuizResult},
        dto::request::{AddTeacherRequest, LoginRequest, RegisterRequest},
    },
    services::{QuizDraft, StudentDashboard},
};

#[derive(Parser)]
#[command(name = "quiz-link")]
#[command(author, version, about = "Quiz client for admins, teachers and students")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Register a student account
    Register {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        #[arg(short, long)]
        department: String,
    },
    /// Clear the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// List departments
    Departments,
    /// Student area
    Student {
        #[command(subcommand)]
        action: StudentAction,
    },
    /// Teacher area
    Teacher {
        #[command(subcommand)]
        action: TeacherAction,
    },
    /// Admin area
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum StudentAction {
    /// List quizzes waiting to be taken
    Pending,
    /// Take a pending quiz interactively
    Take { assignment_id: String },
}

#[derive(Subcommand)]
enum TeacherAction {
    /// Create a quiz from a JSON draft file
    Create { file: std::path::PathBuf },
    /// Delete a quiz
    Delete { quiz_id: String },
    /// Assign a quiz to a student
    Assign { quiz_id: String, student_id: String },
    /// Show results for a quiz
    Results { quiz_id: String },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a teacher account
    AddTeacher {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        #[arg(short, long)]
        department: String,
    },
    /// Delete a teacher account
    DeleteTeacher { teacher_id: String },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        log::error!("Command failed [{}]: {}", e.error_code(), e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let state = AppState::new(Config::from_env())?;

    match cli.command {
        Commands::Login { email, password } => {
            enter(&state, Route::Login)?;
            let home = state
                .auth_service()
                .login(&LoginRequest::new(&email, &password))
                .await?;
            println!("Logged in. Home: {}", home.path());
        }
        Commands::Register {
            name,
            email,
            password,
            department,
        } => {
            enter(&state, Route::Register)?;
            let account = RegisterRequest {
                name,
                email,
                password,
                department_id: department,
            };
            let home = state.auth_service().register(&account).await?;
            println!("Registered. Home: {}", home.path());
        }
        Commands::Logout => {
            state.auth_service().logout().await?;
            println!("Logged out.");
        }
        Commands::Whoami => match state.guard.profile() {
            Some(profile) => println!(
                "{} <{}> role={}",
                profile.name,
                profile.email.unwrap_or_default(),
                profile
                    .role
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "unknown".to_string())
            ),
            None => println!("Not logged in."),
        },
        Commands::Departments => {
            for department in state.admin_service().departments().await? {
                println!("{}  {}", department.id, department.label());
            }
        }
        Commands::Student { action } => {
            enter(&state, Route::Student)?;
            run_student(&state, action).await?;
        }
        Commands::Teacher { action } => {
            enter(&state, Route::Teacher)?;
            run_teacher(&state, action).await?;
        }
        Commands::Admin { action } => {
            enter(&state, Route::Admin)?;
            run_admin(&state, action).await?;
        }
    }
    Ok(())
}

/// Applies the route table; a redirect ends the command.
fn enter(state: &AppState, route: Route) -> AppResult<()> {
    match navigate(&state.guard, route) {
        Navigation::Render(_) => Ok(()),
        Navigation::Redirect(Route::Login) => Err(AppError::Unauthorized(
            "Please log in first (quiz-link login)".to_string(),
        )),
        Navigation::Redirect(target) => Err(AppError::Unauthorized(format!(
            "{} is not available for this account, go to {}",
            route.path(),
            target.path()
        ))),
    }
}

async fn run_student(state: &AppState, action: StudentAction) -> AppResult<()> {
    let mut dashboard = state.student_dashboard();
    dashboard.refresh_pending().await?;

    match action {
        StudentAction::Pending => {
            if dashboard.pending().is_empty() {
                println!("No pending quizzes.");
            }
            for quiz in dashboard.pending() {
                println!(
                    "{}  {} ({} questions)",
                    quiz.assignment_id,
                    quiz.title,
                    quiz.question_count()
                );
            }
        }
        StudentAction::Take { assignment_id } => {
            dashboard.start(&assignment_id)?;
            take_quiz(&mut dashboard).await?;
        }
    }
    Ok(())
}

async fn take_quiz(dashboard: &mut StudentDashboard) -> AppResult<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("Commands: a-d answer, n next, p previous, <number> jump, submit, quit");

    loop {
        print_current_question(dashboard);

        let Some(line) = lines.next_line().await? else {
            dashboard.back_to_list();
            return Ok(());
        };
        let input = line.trim();

        let outcome = match input {
            "" => Ok(()),
            "n" | "next" => {
                dashboard.session_mut().next();
                Ok(())
            }
            "p" | "prev" | "previous" => {
                dashboard.session_mut().previous();
                Ok(())
            }
            "q" | "quit" => {
                dashboard.back_to_list();
                println!("Quiz abandoned; it stays pending.");
                return Ok(());
            }
            "s" | "submit" => match dashboard.submit().await {
                Ok(result) => {
                    print_review(dashboard, &result);
                    dashboard.back_to_list();
                    return Ok(());
                }
                Err(e) => Err(e),
            },
            other => match other.parse::<usize>() {
                Ok(number) => {
                    let len = dashboard
                        .session()
                        .attempt()
                        .map_or(0, |a| a.quiz().question_count());
                    question_index(number, len)
                        .and_then(|index| dashboard.session_mut().jump_to(index))
                }
                Err(_) => other
                    .parse::<OptionKey>()
                    .and_then(|key| dashboard.session_mut().select_current(key)),
            },
        };

        if let Err(e) = outcome {
            println!("{}", e);
        }
    }
}

/// Maps a 1-based question number typed by the student to an index.
fn question_index(number: usize, len: usize) -> AppResult<usize> {
    number
        .checked_sub(1)
        .filter(|index| *index < len)
        .ok_or(AppError::IndexOutOfRange { index: number, len })
}

fn print_current_question(dashboard: &StudentDashboard) {
    let Some(attempt) = dashboard.session().attempt() else {
        return;
    };
    let question = attempt.current_question();
    let selected = attempt.answer_for(&question.id);

    println!();
    println!(
        "Question {}/{} ({} answered)",
        attempt.current_index() + 1,
        attempt.quiz().question_count(),
        attempt.answered_count()
    );
    println!("{}", question.text);
    for option in &question.options {
        let marker = if selected == Some(option.key) { '*' } else { ' ' };
        println!(" {} {}) {}", marker, option.key, option.text);
    }
}

fn print_review(dashboard: &StudentDashboard, result: &QuizResult) {
    println!();
    println!(
        "Score: {:.0}% ({}/{} correct)",
        result.score, result.correct_count, result.total_questions
    );

    let quiz = dashboard.session().attempt().map(|a| a.quiz());
    for detail in &result.results {
        let text = quiz
            .and_then(|q| q.question(&detail.question_id))
            .map(|q| q.text.as_str())
            .unwrap_or(detail.question_id.as_str());
        match detail.revealed_answer() {
            None => println!("  [ok] {} -> {}", text, detail.selected_key),
            Some(correct) => println!(
                "  [x]  {} -> {} (correct: {})",
                text, detail.selected_key, correct
            ),
        }
    }
}

async fn run_teacher(state: &AppState, action: TeacherAction) -> AppResult<()> {
    let service = state.teacher_service();

    match action {
        TeacherAction::Create { file } => {
            let contents = tokio::fs::read_to_string(&file).await?;
            let draft: QuizDraft = serde_json::from_str(&contents)?;
            let quiz = service.create_quiz(&draft).await?;
            println!(
                "Created quiz {} '{}' with {} questions",
                quiz.id,
                quiz.title,
                quiz.question_count()
            );
        }
        TeacherAction::Delete { quiz_id } => {
            println!("{}", service.delete_quiz(&quiz_id).await?);
        }
        TeacherAction::Assign {
            quiz_id,
            student_id,
        } => {
            println!("{}", service.assign_quiz(&quiz_id, &student_id).await?);
        }
        TeacherAction::Results { quiz_id } => {
            let scores = service.results(&quiz_id).await?;
            if scores.is_empty() {
                println!("No results yet.");
            }
            for row in scores {
                let completed = row
                    .completed_at
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<24} {:<28} {:>6.1}%  {}",
                    row.student.name, row.student.email, row.score, completed
                );
            }
        }
    }
    Ok(())
}

async fn run_admin(state: &AppState, action: AdminAction) -> AppResult<()> {
    let mut service = state.admin_service();

    match action {
        AdminAction::AddTeacher {
            name,
            email,
            password,
            department,
        } => {
            let request = AddTeacherRequest {
                name,
                email,
                password,
                department_id: department,
            };
            let teacher = service.add_teacher(&request).await?;
            println!("Added teacher {} ({})", teacher.name, teacher.id);
        }
        AdminAction::DeleteTeacher { teacher_id } => {
            println!("{}", service.delete_teacher(&teacher_id).await?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_number_maps_to_index() {
        assert_eq!(question_index(1, 3), Ok(0));
        assert_eq!(question_index(3, 3), Ok(2));
    }

    #[test]
    fn question_number_zero_is_out_of_range() {
        assert_eq!(
            question_index(0, 3),
            Err(AppError::IndexOutOfRange { index: 0, len: 3 })
        );
        assert!(question_index(4, 3).is_err());
    }
}
