use failure_rail::prelude::*;
use failure_rail::{code_or_unknown, mark_unexpected};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppCode {
    NotFound,
    Forbidden,
}

impl Code for AppCode {
    fn error_code(&self) -> &str {
        match self {
            AppCode::NotFound => "not_found",
            AppCode::Forbidden => "forbidden",
        }
    }
}

fn read_config() -> FailureResult<String> {
    // Wrap a standard error and give it a code
    std::fs::read_to_string("config.toml")
        .translate(AppCode::NotFound, (message("The configuration file is missing."),))
}

fn load_user(id: u64) -> FailureResult<String> {
    if id == 0 {
        return Err(new!(AppCode::NotFound, message("No such user."), info!("user_id" => id)));
    }
    Ok(format!("user-{id}"))
}

fn handler(id: u64) -> FailureResult<String> {
    // Translate storage codes into access codes at the boundary
    load_user(id).translate(AppCode::Forbidden, (info!("handler" => "show_user"),))
}

fn main() {
    println!("Running Quick Start examples...");

    println!("\n1. Wrapping a standard error:");
    if let Err(err) = read_config() {
        println!("Error: {err}");
        println!("Code: {}", code_or_unknown(&err));
        println!("Message: {}", message_of(&err));
    }

    println!("\n2. Translating codes:");
    if let Err(err) = handler(0) {
        println!("Error: {err}");
        println!("Is forbidden: {}", is(&err, &[&AppCode::Forbidden]));
        println!("Is not found: {}", is(&err, &[&AppCode::NotFound]));
        for info in info_list_of(&err) {
            println!("Info: {info:?}");
        }
    }

    println!("\n3. Hiding codes:");
    if let Err(err) = handler(0).mark_unexpected(()) {
        println!("Code: {:?}", code_of(&err));
    }

    println!("\n4. Full report:");
    let err = mark_unexpected!(unexpected!("invariant broken"), message("Please retry later."));
    println!("{err:#}");
}
