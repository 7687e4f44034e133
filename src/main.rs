use clap::Parser;
use expense_ledger::config::Config;
use expense_ledger::controller::Session;
use expense_ledger::types::MemoryLedger;
use log::error;

fn main() {
    env_logger::init();
    let config = Config::parse();
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let mut session = Session::new(stdin, stdout, MemoryLedger::new(), config.file);
    if let Err(err) = session.run() {
        error!("Session aborted: {err:?}");
        eprintln!("오류 발생: {err}");
        std::process::exit(1);
    }
}
