//! DocuVault - CLI entry point.
//!
//! Thin terminal shell over the headless page logic in the library. Each
//! subcommand maps to one screen of the web UI.

mod cli;

use std::io::{self, BufRead, Write};
use std::path::Path;

use clap::Parser;

use docuvault_client::api::{ApiClient, DocumentFilter, FileUpload, NewDocument};
use docuvault_client::display::{self, EM_DASH};
use docuvault_client::error::{AppError, Result};
use docuvault_client::models::{AccessLevel, Id};
use docuvault_client::session::{FileBackend, SessionStore};
use docuvault_client::views::{
    dashboard, document_detail, document_edit, document_form, document_list, login, register,
};
use docuvault_client::{telemetry, ClientConfig};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let args = cli::Cli::parse();

    telemetry::init_tracing(if args.verbose { "debug" } else { "warn" });

    let mut config = ClientConfig::from_env();
    if let Some(url) = args.url {
        config.base_url = url;
    }
    if let Some(path) = args.session {
        config.session_path = path;
    }

    if let Err(e) = run(args.command, config).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(command: cli::Command, config: ClientConfig) -> Result<()> {
    let backend = FileBackend::new(config.session_path.clone());
    let mut session = SessionStore::new(Box::new(backend));
    let client = ApiClient::new(config)?;

    match command {
        cli::Command::Register {
            name,
            email,
            password,
            password_confirmation,
            department,
            role,
        } => {
            let form = register::RegistrationForm {
                name,
                email,
                password_confirmation: password_confirmation.unwrap_or_else(|| password.clone()),
                password,
                department_id: Some(Id::from(department)),
                role,
            };
            register::submit(&client, &mut session, &form).await?;
            match session.user() {
                Some(user) => println!("Account created. Signed in as {}.", user.name),
                None => println!("Account created. Sign in to continue."),
            }
        }

        cli::Command::Login { email, password } => {
            login::submit(&client, &mut session, &email, &password).await?;
            if let Some(user) = session.user() {
                println!("Signed in as {}.", user.name);
            }
        }

        cli::Command::Logout => {
            login::logout(&client, &mut session).await;
            println!("Signed out.");
        }

        cli::Command::Status => match session.user() {
            Some(user) => {
                let roles: Vec<&str> = user.roles.names().collect();
                println!("Signed in as {} (id {})", user.name, user.id);
                for role in &roles {
                    println!("  role: {role} [{}]", display::role_badge(role));
                }
                if let Some(department_id) = &user.department_id {
                    let label = display::department_display_name(department_id)
                        .unwrap_or(department_id.as_str());
                    println!("  department: {label}");
                }
            }
            None => println!("Not signed in."),
        },

        cli::Command::Dashboard => {
            let view = dashboard::load(&client, &session).await?;
            let department = view.department_label.as_deref().unwrap_or("Department");
            println!("Welcome back!");
            println!("Total Accessible Documents: {}", view.stats.total);
            println!("{department} Documents: {}", view.stats.department);
            println!("Total Document Downloads: {}", view.stats.downloads);
        }

        cli::Command::List {
            search,
            category,
            department,
        } => {
            let filter = DocumentFilter {
                search: search.unwrap_or_default(),
                category_id: category.unwrap_or_default(),
                department_id: department.unwrap_or_default(),
            };
            let view = document_list::load(&client, &session, &filter).await?;
            if view.rows.is_empty() {
                println!("No documents found.");
            } else {
                println!("Showing {} documents", view.rows.len());
                for row in &view.rows {
                    println!(
                        "{}\t{}\t{}\t{}\t{}",
                        row.id, row.title, row.category, row.department, row.uploader
                    );
                }
            }
            if view.can_create {
                println!("(use `docuvault upload` to add a document)");
            }
        }

        cli::Command::Show { id } => {
            let id = Id::from(id);
            let view = document_detail::load(&client, &session, &id).await?;
            let doc = &view.document;
            println!("{} {}", view.file_kind().glyph(), doc.title);
            if let Some(description) = &doc.description {
                println!("{description}");
            }
            println!("File: {}", doc.file_name.as_deref().unwrap_or(EM_DASH));
            println!("Category: {}", view.category.as_deref().unwrap_or(EM_DASH));
            println!(
                "Department: {}",
                view.department.as_deref().unwrap_or(EM_DASH)
            );
            println!("Access Level: {}", view.access_label());
            println!(
                "Uploaded By: {}",
                doc.uploader
                    .as_ref()
                    .and_then(|u| u.name.as_deref())
                    .unwrap_or(EM_DASH)
            );
            match doc.created_at {
                Some(created_at) => {
                    println!("Upload Date: {}", created_at.format("%Y-%m-%d %H:%M:%S UTC"))
                }
                None => println!("Upload Date: {EM_DASH}"),
            }
            println!(
                "File Size: {}",
                view.size_label().as_deref().unwrap_or(EM_DASH)
            );
            println!("Downloads: {}", doc.download_count);

            let mut actions = Vec::new();
            if view.can_download {
                actions.push("download");
            }
            if view.can_edit {
                actions.push("edit");
            }
            if view.can_delete {
                actions.push("delete");
            }
            if !actions.is_empty() {
                println!("Available actions: {}", actions.join(", "));
            }
        }

        cli::Command::Upload {
            title,
            description,
            category,
            department,
            access_level,
            file,
        } => {
            let access_level = parse_access_level(&access_level)?;
            let data = tokio::fs::read(&file).await?;
            let file_name = file
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .ok_or_else(|| AppError::Validation("File is required".into()))?;
            let draft = NewDocument {
                title,
                description,
                access_level,
                category_id: Some(Id::from(category)),
                department_id: department.map(Id::from),
                file: Some(FileUpload {
                    content_type: content_type_for(&file),
                    file_name,
                    data,
                }),
            };
            let created = document_form::submit(&client, &session, draft).await?;
            println!("Document created successfully (id {}).", created.id);
        }

        cli::Command::Edit {
            id,
            title,
            description,
            category,
            access_level,
        } => {
            let id = Id::from(id);
            let view = document_edit::load(&client, &session, &id).await?;
            let mut form = view.form.clone();
            if let Some(title) = title {
                form.title = title;
            }
            if let Some(description) = description {
                form.description = description;
            }
            if let Some(category) = category {
                form.category_id = Some(Id::from(category));
            }
            if let Some(access_level) = access_level {
                form.access_level = parse_access_level(&access_level)?;
            }
            let updated = document_edit::submit(&client, &session, &id, &form).await?;
            println!("Saved changes to \"{}\".", updated.title);
        }

        cli::Command::Delete { id, yes } => {
            if !yes && !confirm("Are you sure you want to delete this document? This action cannot be undone.")? {
                println!("Aborted.");
                return Ok(());
            }
            let id = Id::from(id);
            document_detail::delete(&client, &session, &id).await?;
            println!("Document deleted.");
        }

        cli::Command::Download { id, out } => {
            let id = Id::from(id);
            let view = document_detail::load(&client, &session, &id).await?;
            let path = document_detail::download_to(&client, &session, &view.document, &out).await?;
            println!("Saved {}.", path.display());
        }
    }

    Ok(())
}

fn parse_access_level(value: &str) -> Result<AccessLevel> {
    AccessLevel::from_str_loose(value).ok_or_else(|| {
        AppError::Validation("Access level must be public, department or private".into())
    })
}

/// MIME type for the upload part, by extension.
fn content_type_for(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    let mime = match ext.as_str() {
        "pdf" => "application/pdf",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        _ => return None,
    };
    Some(mime.to_string())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
