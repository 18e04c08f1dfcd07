use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn write_event_feed(path: &Path, rows: &[(&str, &str)]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["type", "key"])?;
    for (kind, key) in rows {
        wtr.write_record([*kind, *key])?;
    }

    wtr.flush()?;
    Ok(())
}
