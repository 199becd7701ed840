use clap::Parser;
use minibank::application::{init, ConfigService, LedgerService};
use minibank::cli::{output, Cli, Commands, StdoutRenderer};
use minibank::domain::money::{format_money, parse_amount};
use minibank::error::MinibankError;
use minibank::infrastructure::FileStateStore;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MinibankError> {
    match cli.command {
        Commands::Init { path } => init::init(&path),
        Commands::Config { key, value, list } => {
            let store = FileStateStore::discover()?;
            let service = ConfigService::new(store);

            if list {
                let config = service.list()?;
                println!("currency = {}", config.currency);
                println!("refresh = {}", config.refresh_secs);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: minibank config [--list | <key> [<value>]]");
                println!("Valid keys: currency, refresh, created");
                Ok(())
            }
        }
        command => {
            let store = FileStateStore::discover()?;
            let config = store.load_config()?;
            let mut service = LedgerService::load(store, config)?;
            run_ledger_command(&mut service, command)?;
            // Host teardown runs one final persist.
            service.close()
        }
    }
}

fn run_ledger_command(
    service: &mut LedgerService,
    command: Commands,
) -> Result<(), MinibankError> {
    let currency = service.config().currency.clone();

    match command {
        Commands::Accounts => {
            print!(
                "{}",
                output::format_account_cards(&service.ledger().accounts, &currency)
            );
            Ok(())
        }
        Commands::Transactions { limit } => {
            service.refresh_labels();
            print!(
                "{}",
                output::format_transaction_list(&service.ledger().transactions, &currency, limit)
            );
            Ok(())
        }
        Commands::Notifications { unread } => {
            service.refresh_labels();
            print!(
                "{}",
                output::format_notification_list(&service.ledger().notifications, unread)
            );
            Ok(())
        }
        Commands::Transfer {
            from,
            to,
            amount,
            description,
            external,
            recipient,
        } => {
            let amount = parse_amount(&amount)?;
            service.transfer(
                &from,
                &to,
                amount,
                description.as_deref(),
                external,
                recipient.as_deref(),
            )?;
            println!(
                "Transferred {} from {}",
                format_money(&currency, amount),
                from
            );
            print!(
                "{}",
                output::format_account_cards(&service.ledger().accounts, &currency)
            );
            Ok(())
        }
        Commands::Deposit {
            to,
            amount,
            description,
        } => {
            let amount = parse_amount(&amount)?;
            service.deposit(&to, amount, description.as_deref())?;
            println!("Deposited {} to {}", format_money(&currency, amount), to);
            print!(
                "{}",
                output::format_account_cards(&service.ledger().accounts, &currency)
            );
            Ok(())
        }
        Commands::SetBalance { key, amount } => {
            let amount = parse_amount(&amount)?;
            service.update_account_balance(&key, amount)?;
            print!(
                "{}",
                output::format_account_cards(&service.ledger().accounts, &currency)
            );
            Ok(())
        }
        Commands::Read { id, all } => {
            if all {
                service.mark_all_notifications_read()?;
            } else if let Some(id) = id {
                service.mark_notification_read(id)?;
            } else {
                println!("Usage: minibank read [<id> | --all]");
                return Ok(());
            }
            println!("{} unread", service.unread_count());
            Ok(())
        }
        Commands::Watch {
            interval,
            iterations,
        } => {
            let period = interval.unwrap_or(service.config().refresh_secs);
            service.subscribe(Box::new(StdoutRenderer::new(currency)));

            let mut ticks = 0u64;
            loop {
                service.refresh_labels();
                ticks += 1;
                if iterations.is_some_and(|n| ticks >= n) {
                    break;
                }
                std::thread::sleep(std::time::Duration::from_secs(period));
            }
            Ok(())
        }
        // Init and Config never reach this function.
        Commands::Init { .. } | Commands::Config { .. } => Ok(()),
    }
}
