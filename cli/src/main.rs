use std::sync::Arc;

use clap::{Parser, Subcommand};
use kursa::model::{DbCourseStore, ModelManager, entity::Course};
use kursa::web::AuthenticatedUser;

#[derive(Parser, Debug)]
#[command(about = "CLI tool for managing the course catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage courses
    Course {
        #[command(subcommand)]
        action: CourseCommands,
    },
}

/// Course management
#[derive(Subcommand, Debug)]
pub enum CourseCommands {
    Add {
        #[arg(long)]
        teacher_id: String,
        #[arg(long)]
        teacher_name: String,
    },
    List {
        /// Exact category to filter on; omit (or pass "all") for everything
        #[arg(long)]
        category: Option<String>,
    },
    Get {
        #[arg(long)]
        id: String,
    },
    Rm {
        #[arg(long)]
        id: String,
        /// Must match the course's owning teacher
        #[arg(long)]
        teacher_id: String,
    },
}

#[tokio::main]
async fn main() -> kursa::error::AppResult<()> {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();

    let store = DbCourseStore::connect(&std::env::var("DATABASE_URL").unwrap())?;
    let mm = ModelManager::new(Arc::new(store));

    match args.command {
        Commands::Course { action } => match action {
            CourseCommands::Add {
                teacher_id,
                teacher_name,
            } => {
                let course = Course::create(&mm, &teacher_id, &teacher_name).await?;
                println!(
                    "Course created: {}",
                    serde_json::to_string_pretty(&course).unwrap()
                );
            }

            CourseCommands::List { category } => {
                let courses = Course::list(&mm, category.as_deref()).await?;
                for course in &courses {
                    println!(
                        "{} [{}] {} — {}",
                        course.course_id(),
                        course.category(),
                        course.title(),
                        course.teacher_name()
                    );
                }
                println!("{} course(s)", courses.len());
            }

            CourseCommands::Get { id } => {
                let course = Course::find_by_id(&mm, &id).await?;
                println!("{}", serde_json::to_string_pretty(&course).unwrap());
            }

            CourseCommands::Rm { id, teacher_id } => {
                let actor = AuthenticatedUser::new(teacher_id);
                let course = Course::delete(&mm, &id, &actor).await?;
                println!("Course deleted: {}", course.course_id());
            }
        },
    }

    Ok(())
}
