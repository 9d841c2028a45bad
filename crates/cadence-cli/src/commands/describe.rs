use anyhow::Result;
use cadence_core::format::describe;
use chrono::NaiveDate;

use crate::cli::DescribeCommand;
use crate::util::build_rule;

pub fn describe_rule(command: DescribeCommand, today: NaiveDate) -> Result<()> {
    let rule = build_rule(&command.rule, today)?;
    println!("{}", describe(&rule));
    Ok(())
}
