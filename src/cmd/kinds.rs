//! Kinds command CLI handler.

use serde::Serialize;
use sql_seeder::entity::{Domain, EntityKind};

#[derive(Serialize)]
struct KindInfo {
    kind: EntityKind,
    domain: Domain,
    table: &'static str,
    file: String,
    columns: &'static [&'static str],
}

impl From<EntityKind> for KindInfo {
    fn from(kind: EntityKind) -> Self {
        Self {
            kind,
            domain: kind.domain(),
            table: kind.table_name(),
            file: kind.file_name(),
            columns: kind.columns(),
        }
    }
}

pub fn run(domain: Option<String>, json: bool) -> anyhow::Result<()> {
    let kinds = match domain {
        Some(d) => d
            .parse::<Domain>()
            .map_err(|e| anyhow::anyhow!(e))?
            .kinds(),
        None => EntityKind::ALL.to_vec(),
    };

    let infos: Vec<KindInfo> = kinds.into_iter().map(KindInfo::from).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    let mut current_domain = None;
    for info in &infos {
        if current_domain != Some(info.domain) {
            if current_domain.is_some() {
                println!();
            }
            println!("{}:", info.domain);
            current_domain = Some(info.domain);
        }
        println!(
            "  {:<20} {:<18} {:<24} {}",
            info.kind.name(),
            info.table,
            info.file,
            info.columns.join(", ")
        );
    }

    Ok(())
}
