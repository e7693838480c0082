use anyhow::{anyhow, bail, Result};
use clap::Args;
use mambu_api::{Error, HttpMethod, ParamsMap, RequestExecutor};

use crate::output::{print_body, OutputFormat};

#[derive(Args)]
pub struct RequestArgs {
    /// Full URL, or a path joined onto --base-url (e.g. /api/clients/123)
    pub url: String,

    /// Request parameter as key=value; repeat for more (e.g. -p fullDetails=true)
    #[arg(short = 'p', long = "param")]
    pub params: Vec<String>,

    /// Base URL for relative paths (e.g. https://demo.mambu.com)
    #[arg(long, env = "MAMBU_BASE_URL")]
    pub base_url: Option<String>,
}

pub async fn run(
    args: &RequestArgs,
    method: HttpMethod,
    executor: &RequestExecutor,
    format: &OutputFormat,
) -> Result<()> {
    let url = resolve_url(&args.url, args.base_url.as_deref());
    let params = parse_params(&args.params)?;

    match executor.execute_request(&url, &params, method).await {
        Ok(body) => {
            print_body(&body, format);
            Ok(())
        }
        Err(Error::HttpStatus { status, body }) => {
            eprintln!("{} {} failed with status {}", method, url, status);
            if !body.is_empty() {
                eprintln!("{}", body);
            }
            bail!("request failed with status {}", status)
        }
        Err(err) => Err(err.into()),
    }
}

fn resolve_url(url: &str, base_url: Option<&str>) -> String {
    match base_url {
        Some(base) if url.starts_with('/') => format!("{}{}", base.trim_end_matches('/'), url),
        _ => url.to_string(),
    }
}

fn parse_params(raw: &[String]) -> Result<ParamsMap> {
    let mut params = ParamsMap::new();
    for pair in raw {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("Invalid parameter '{}': expected key=value", pair))?;
        if key.is_empty() {
            bail!("Invalid parameter '{}': empty key", pair);
        }
        params.add_param(key, Some(value.to_string()));
    }
    Ok(params)
}
