mod config;
mod wiring;

use std::error::Error;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use runtime::{SessionReport, TradeJournalCsvWriter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    runtime::logging::init_tracing();

    let config = config::Config::from_env()?;
    let report = wiring::run_session(&config).await?;
    write_trade_journal(&config.journal_output_path, &report)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn write_trade_journal(path: &str, report: &SessionReport) -> Result<(), std::io::Error> {
    let journal_path = Path::new(path);

    if let Some(parent) = journal_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        fs::create_dir_all(parent)?;
    }

    let journal_file = BufWriter::new(File::create(journal_path)?);
    let mut journal_writer = TradeJournalCsvWriter::new(journal_file);
    journal_writer.write_report(report)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use runtime::{SessionReport, TradeKind, TradeRecord, TRADE_JOURNAL_CSV_HEADER};
    use rust_decimal_macros::dec;

    use super::write_trade_journal;

    #[test]
    fn write_trade_journal_creates_parent_dir_and_writes_rows() {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let root = std::env::temp_dir().join(format!("bot-journal-{unique}"));
        let journal_path = root.join("nested").join("trades.csv");
        let report = SessionReport::new(
            dec!(10000),
            dec!(10001.25),
            vec![TradeRecord::new(
                4,
                TradeKind::Arbitrage,
                dec!(1.25),
                dec!(10001.25),
            )],
            false,
            30,
        );

        write_trade_journal(journal_path.to_str().unwrap(), &report)
            .expect("journal output should be written");

        let actual = fs::read_to_string(&journal_path).expect("journal file should exist");
        assert_eq!(
            actual,
            format!("{TRADE_JOURNAL_CSV_HEADER}1,4,arbitrage,1.25,1.25,10001.25\n")
        );

        fs::remove_dir_all(&root).expect("temp journal directory should be removable");
    }
}
