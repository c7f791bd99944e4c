use chrono::{NaiveDate, NaiveDateTime};
use clap::Args;
use loan_eligibility::error::AppError;
use loan_eligibility::screening::{EligibilityService, ListType};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the stored record snapshot for each demo account
    #[arg(long)]
    pub(crate) show_records: bool,
}

fn demo_ts(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Canned walkthrough: two batches flag accounts, two delist batches arrive
/// out of order, and the checks show which flags survive.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = EligibilityService::new();

    let batches: [(ListType, NaiveDateTime, &str); 4] = [
        (
            ListType::Str,
            demo_ts(2024, 1, 1),
            "AccountID,Reason\nACC-100,suspicious transfers\nACC-200,structuring pattern\n",
        ),
        (
            ListType::Fdm,
            demo_ts(2024, 3, 1),
            "AccountID,Reason\nACC-300,fraud ring match\n",
        ),
        (
            // Strictly newer than the STR flag: ACC-100 is cleared.
            ListType::DelistStr,
            demo_ts(2024, 2, 1),
            "AccountID,Reason\nACC-100,cleared after review\n",
        ),
        (
            // Predates the FDM flag: ACC-300 stays ineligible.
            ListType::DelistFdm,
            demo_ts(2024, 2, 1),
            "AccountID,Reason\nACC-300,premature clearance\n",
        ),
    ];

    println!("== list uploads ==");
    for (list_type, uploaded_at, csv) in batches {
        let summary = service.upload_list_at(list_type, uploaded_at, csv.as_bytes())?;
        println!(
            "{:<20} uploaded {} -> {} processed, {} skipped",
            list_type.description(),
            uploaded_at,
            summary.processed_rows,
            summary.skipped_rows
        );
    }

    println!("\n== eligibility checks ==");
    for account in ["ACC-100", "ACC-200", "ACC-300", "ACC-999"] {
        let outcome = service.check(account);
        println!("{account}: {}", outcome.message);
        for reason in &outcome.reasons {
            println!(
                "  - {} ({}): {}",
                reason.list_type.code(),
                reason.listed_at,
                reason.reason
            );
        }

        if args.show_records {
            for (list_type, record) in service.account_records(account) {
                println!(
                    "  [{}] {:?} listed {} reason '{}'",
                    list_type.code(),
                    record.status,
                    record.listed_at,
                    record.reason
                );
            }
        }
    }

    let stats = service.statistics();
    println!("\n== statistics ==");
    println!("accounts on file: {}", stats.total_accounts);
    for (list_type, count) in &stats.records_by_list_type {
        if *count > 0 {
            println!("  {:<20} {}", list_type.code(), count);
        }
    }

    Ok(())
}
