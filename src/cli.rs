use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use log::error;

use crate::api::client::ApiClient;
use crate::app::Settings;
use crate::utils::RUNTIME;
use crate::verify::notice::{Notice, NoticeStyle};
use crate::verify::query::QueryOrchestrator;

/// Check a personal customs clearance code (통관고유부호) against name and phone.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Name as registered, e.g. 홍길동
    #[arg(long, default_value = "")]
    pub name: String,

    /// Clearance code, e.g. P000000000000
    #[arg(long, default_value = "")]
    pub passcode: String,

    /// Phone number, 010XXXXXXXX or 010-XXXX-XXXX
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Read clipboard text from stdin and fill in whatever fields it contains
    #[arg(long)]
    pub paste: bool,
}

fn print_notice(notice: &Notice) {
    match notice.style() {
        NoticeStyle::Success => println!("{}: {}", notice.title(), notice.message()),
        NoticeStyle::Failure => eprintln!("{}: {}", notice.title(), notice.message()),
    }
}

pub fn run(args: Args, settings: &Settings) -> ExitCode {
    let client = match ApiClient::new(settings.timeout()) {
        Ok(client) => client,
        Err(e) => {
            error!("could not build HTTP client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let paste = args.paste;
    let mut orch = QueryOrchestrator::new(settings.endpoint_url());
    {
        let input = orch.input_mut();
        input.name = args.name;
        input.passcode = args.passcode;
        input.phone = args.phone;
    }

    let notice = RUNTIME.block_on(async {
        if paste {
            let mut text = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut text) {
                error!("could not read clipboard text from stdin: {e}");
            }
            if let Some(notice) = orch.paste(Some(&text), &client).await {
                return notice;
            }
        }
        orch.submit(&client).await
    });

    print_notice(&notice);
    if notice == Notice::Match {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
