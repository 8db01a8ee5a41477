use std::env;
use std::io::Write;

use anyhow::{bail, Context};
use vortex_fetch::net::Encoding;
use vortex_fetch::{Body, FetchConfig, Fetcher, RequestOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut raw = false;
    let mut encoding = None;
    let mut url = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--raw" => raw = true,
            "--encoding" => {
                let name = args.next().context("--encoding needs a value")?;
                encoding = Some(name.parse::<Encoding>()?);
            }
            _ if url.is_none() => url = Some(arg),
            _ => bail!("unexpected argument: {arg}"),
        }
    }
    let Some(url) = url else {
        bail!("usage: fetch [--raw] [--encoding NAME] <url>");
    };

    let fetcher = Fetcher::new(Some(FetchConfig::default()));

    if raw {
        let options = RequestOptions { encoding, ..Default::default() };
        match fetcher.raw_request(&url, Some(options)).await? {
            Body::Text(text) => println!("{text}"),
            Body::Bytes(bytes) => std::io::stdout().write_all(&bytes)?,
        }
    } else {
        let value: serde_json::Value = fetcher.json_request(&url).await?;
        println!("{}", serde_json::to_string_pretty(&value)?);
    }

    Ok(())
}
