// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::env::args;
use std::time::Duration;

use eveapi::ApiBuilder;

#[tokio::main]
async fn main() -> Result<(), Option<()>> {
    env_logger::init();

    let args: Vec<String> = args().collect();
    if args.len() != 4 {
        println!("Usage: {} <key id> <verification code> <character id>", args[0]);
        return Err(None);
    }

    let char_id: i64 = match args[3].parse() {
        Ok(char_id) => char_id,
        Err(e) => {
            log::error!("Invalid character id {}: {e}", args[3]);
            return Err(None);
        }
    };

    let api = match ApiBuilder::new(&args[1], &args[2])
        .set_timeout(Duration::from_secs(30))
        .build()
    {
        Ok(api) => api,
        Err(e) => {
            log::error!("Couldn’t set up the client: {e}");
            return Err(None);
        }
    };
    let character = api.character(char_id);

    let (sheet, balance, queue) = match futures::try_join!(
        character.character_sheet(),
        character.wallet_balance(),
        character.skill_queue(),
    ) {
        Ok(results) => results,
        Err(e) => {
            log::error!("Request failed: {e}");
            return Err(None);
        }
    };

    let sheet = sheet.result;
    println!("{} ({})", sheet.name, sheet.corp.name);
    println!("{:.2} ISK", balance.result);
    println!("{} skill points", sheet.skillpoints);
    for skill in queue.result {
        println!(
            "  {}: level {} ({} → {} SP)",
            skill.type_id, skill.level, skill.start_sp, skill.end_sp
        );
    }
    println!("Cached until {}", balance.expires_at);
    Ok(())
}
