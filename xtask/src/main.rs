//! Developer tasks (schema generation, contract fixtures, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(PathBuf::from)
            .unwrap_or(manifest_dir)
    } else {
        manifest_dir
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn contracts_fixtures_dir() -> PathBuf {
    project_root().join("contracts").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_store_schema() -> schemars::Schema {
    schema_for!(lostfound_repo::StoreDocument)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(lostfound_settings::LostfoundConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "lostfound.store.v1.json",
            generate: generate_store_schema,
        },
        SchemaSpec {
            filename: "lostfound.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Check that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }
        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }
    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate contract fixtures against schemas and loaders");
    eprintln!("  explain-coverage  Validate all codes have explanations");
}

fn compile(schema: &schemars::Schema) -> anyhow::Result<jsonschema::Validator> {
    let value = serde_json::to_value(schema).context("Failed to convert schema")?;
    jsonschema::validator_for(&value).map_err(|e| anyhow::anyhow!("Failed to compile schema: {e}"))
}

/// Validate every fixture in contracts/fixtures/.
///
/// `*.json` files are store documents: they must satisfy the generated store
/// schema and load through the repository's own checks. `*.toml` files are
/// configs: they must parse and resolve.
fn conform() -> anyhow::Result<()> {
    let fixtures_dir = contracts_fixtures_dir();
    if !fixtures_dir.exists() {
        bail!("contracts/fixtures/ not found at {}", fixtures_dir.display());
    }

    let store_schema = compile(&generate_store_schema())?;
    let config_schema = compile(&generate_config_schema())?;
    println!("✓ store and config schemas compile");

    let mut fixture_count = 0;
    let mut errors = Vec::new();

    let mut entries: Vec<PathBuf> = fs::read_dir(&fixtures_dir)
        .context("Failed to read contracts/fixtures/")?
        .map(|e| e.map(|e| e.path()))
        .collect::<Result<_, _>>()?;
    entries.sort();

    for path in entries {
        let filename = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let content =
            fs::read_to_string(&path).with_context(|| format!("Failed to read {}", filename))?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => {
                let value: serde_json::Value = serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse {} as JSON", filename))?;
                for err in store_schema.iter_errors(&value) {
                    errors.push(format!("{}: schema validation: {}", filename, err));
                }
                match serde_json::from_value::<lostfound_repo::StoreDocument>(value) {
                    Ok(doc) => {
                        if let Err(reason) = doc.check() {
                            errors.push(format!("{}: {}", filename, reason));
                        }
                    }
                    Err(e) => errors.push(format!("{}: does not load: {}", filename, e)),
                }
            }
            Some("toml") => {
                let resolved = lostfound_settings::parse_config_toml(&content).and_then(|cfg| {
                    let value = serde_json::to_value(&cfg)?;
                    for err in config_schema.iter_errors(&value) {
                        errors.push(format!("{}: schema validation: {}", filename, err));
                    }
                    lostfound_settings::resolve_config(cfg, Default::default())
                });
                if let Err(e) = resolved {
                    errors.push(format!("{}: {:#}", filename, e));
                }
            }
            _ => continue,
        }

        fixture_count += 1;
        println!("  ✓ {} checked", filename);
    }

    if fixture_count == 0 {
        bail!("No fixtures found in {}", fixtures_dir.display());
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("\n✓ All {} contract fixtures pass conformance checks!", fixture_count);
    Ok(())
}

fn explain_coverage() -> anyhow::Result<()> {
    let codes = lostfound_types::explain::all_codes();
    let mut errors = Vec::new();

    for code in codes {
        match lostfound_types::explain::lookup_explanation(code) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("Code '{}' has empty title", code));
                }
                if exp.description.is_empty() {
                    errors.push(format!("Code '{}' has empty description", code));
                }
                if exp.remediation.is_empty() {
                    errors.push(format!("Code '{}' has empty remediation", code));
                }
            }
            None => errors.push(format!("Code '{}' has no explanation", code)),
        }
    }

    if errors.is_empty() {
        println!("✓ {} codes have explanations", codes.len());
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            println!("{}", lostfound_types::SCHEMA_STORE_V1);
            println!("{}", lostfound_settings::SCHEMA_CONFIG_V1);
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
