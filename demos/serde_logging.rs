use failure_rail::{info, message, new, record_of, wrap, StringCode};

const CONFLICT: StringCode = StringCode::new("conflict");

fn save(version: u32) -> Result<(), failure_rail::Failure> {
    Err(new!(CONFLICT, message("The document was changed by someone else."), info!("version" => version)))
}

fn main() {
    let Err(err) = save(3) else {
        return;
    };
    let err = wrap!(err, info!("request_id" => "req-42"));

    let record = record_of(&err);
    match serde_json::to_string_pretty(&record) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Failed to serialize record: {e}"),
    }
}
