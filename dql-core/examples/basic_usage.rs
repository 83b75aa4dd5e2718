use dql_core::{op, query, QueryBuilder};
use tracing_subscriber::EnvFilter;

const EXPECTED: &str = "SELECT COUNT(RNCCalcParty) WHERE stateabbreviation='IL' AND CongressionalDistrict=12 GROUP BY RNCCalcParty LIMIT 200";

fn main() -> dql_core::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let dql = query()
        .select_count("RNCCalcParty")
        .where_("stateabbreviation", op::EQUALS, "IL")?
        .where_("CongressionalDistrict", op::EQUALS, 12)?
        .group_by("RNCCalcParty")
        .limit(200)?
        .to_dql()?;

    println!("DQL: {}", dql);

    if dql != EXPECTED {
        println!("mismatch:");
        println!("  got:      {}", dql);
        println!("  expected: {}", EXPECTED);
    }

    Ok(())
}
