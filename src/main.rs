use std::error::Error;
use std::fs;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use log::{debug, error, info, warn};
use simple_logger::SimpleLogger;

use crate::config::{Config, PolicyConfig};
use crate::rule_table::RuleRow;
use crate::rules::expand_policy;
use crate::validate::validate_rule_set;
use crate::wire::PolicyResponse;

mod backup_rule;
mod config;
mod criteria;
mod duration;
mod error;
mod kind;
mod lifecycle;
mod policies;
mod resource_id;
mod retention;
mod rule_table;
mod rules;
mod tagging;
mod validate;
mod wire;

/// Azure Data Protection backup policy rules
#[derive(Debug, Parser)]
#[clap(name = "dppolicy")]
#[clap(about = "Expands and flattens Azure Data Protection backup policy rules", long_about = None)]
struct Cli {
    #[clap(short, long, default_value = "dppolicy.yaml")]
    config: String,
    #[clap(flatten)]
    verbose: Verbosity,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Prints the Azure request body of the configured policies
    #[clap(arg_required_else_help = false)]
    Expand {
        /// Write the JSON to this file instead of stdout
        #[clap(short, long)]
        output: Option<String>,
        /// Policy name filter
        #[clap(value_parser)]
        policies: Vec<String>,
    },
    /// Turns an Azure policy response back into configuration
    #[clap(arg_required_else_help = true)]
    Flatten {
        /// Write the YAML to this file instead of stdout
        #[clap(short, long)]
        output: Option<String>,
        /// JSON file holding a policy GET or LIST response
        #[clap(value_parser)]
        response: String,
    },
    /// Prints the retention rules of the configured policies
    #[clap(arg_required_else_help = false)]
    Show {
        /// Policy name filter
        #[clap(value_parser)]
        policies: Vec<String>,
    },
    /// Checks the configured policies without printing them
    #[clap(arg_required_else_help = false)]
    Validate {
        /// Policy name filter
        #[clap(value_parser)]
        policies: Vec<String>,
    },
}

fn read_config(path: &str, names: &[String]) -> Result<Vec<PolicyConfig>, Box<dyn Error>> {
    let config = fs::read_to_string(path)?;
    let config: Config = serde_yaml::from_str(&config)?;
    debug!("read {} policies from {}", config.policies.len(), path);

    let policies = PolicyConfig::filter_by_names(&config.policies, names);
    if policies.is_empty() {
        warn!("no policies in {} match filter {:?}", path, names);
    }

    Ok(policies)
}

fn write_output(output: Option<&str>, content: &str) -> Result<(), Box<dyn Error>> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            info!("wrote {}", path);
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn expand(config: &str, names: &[String], output: Option<&str>) -> Result<(), Box<dyn Error>> {
    let mut resources = Vec::new();
    for policy in read_config(config, names)? {
        let resource = validate_rule_set(policy.kind, &policy.rules)
            .and_then(|_| policy.to_resource())
            .map_err(|e| format!("policy {} is invalid: {}", policy.name, e))?;
        resources.push(resource);
        info!("expanded {} policy {}", policy.kind, policy.name);
    }

    let json = if resources.len() == 1 {
        serde_json::to_string_pretty(&resources[0])?
    } else {
        serde_json::to_string_pretty(&resources)?
    };
    write_output(output, &json)
}

fn flatten(response: &str, output: Option<&str>) -> Result<(), Box<dyn Error>> {
    let body = fs::read_to_string(response)?;
    let response: PolicyResponse = serde_json::from_str(&body)?;
    if let Some(next_link) = response.next_link() {
        warn!("response is paged, only the first page is flattened; next page: {}", next_link);
    }

    let mut policies = Vec::new();
    for resource in response.into_resources() {
        let policy = PolicyConfig::from_resource(&resource)?;
        info!("flattened {} policy {}", policy.kind, policy.name);
        policies.push(policy);
    }

    let yaml = serde_yaml::to_string(&Config { policies })?;
    write_output(output, &yaml)
}

fn show(config: &str, names: &[String]) -> Result<(), Box<dyn Error>> {
    for policy in read_config(config, names)? {
        println!("{}", RuleRow::tabled(&policy.name, &policy.rules));
    }
    Ok(())
}

fn validate(config: &str, names: &[String]) -> Result<(), Box<dyn Error>> {
    let mut failed = 0;
    for policy in read_config(config, names)? {
        let result = validate_rule_set(policy.kind, &policy.rules)
            .and_then(|_| expand_policy(policy.kind, &policy.rules));
        match result {
            Ok(_) => info!("policy {} is valid", policy.name),
            Err(e) => {
                error!("policy {} is invalid: {}", policy.name, e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(format!("{} policies failed validation", failed).into());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();

    SimpleLogger::new()
        .with_level(args.verbose.log_level_filter())
        .init()?;
    debug!("{:?}", args);

    match &args.command {
        Commands::Expand { output, policies } => expand(&args.config, policies, output.as_deref()),
        Commands::Flatten { output, response } => flatten(response, output.as_deref()),
        Commands::Show { policies } => show(&args.config, policies),
        Commands::Validate { policies } => validate(&args.config, policies),
    }
}
