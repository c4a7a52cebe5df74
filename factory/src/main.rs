/*!

Renders the objects the operator would apply for an `ApicurioRegistry` document.

```text
REGISTRY_VERSION=2.0.0 OPERATOR_NAME=apicurio-registry-operator registry-factory registry.yaml
```

The output is a multi-document YAML stream on stdout.

!*/

#![deny(
    clippy::expect_used,
    clippy::get_unwrap,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]

use env_logger::Builder;
use log::{error, info, LevelFilter};
use registry_factory::{
    read_registry, render_yaml, AppName, AppNamespace, CacheEntry, Descriptor, FactoryConfig,
    KubeFactory, LoopContext,
};
use registry_model::CrdExt;

/// The log level used when the `RUST_LOG` environment variable does not exist.
const DEFAULT_LEVEL_FILTER: LevelFilter = LevelFilter::Info;
/// Log targets enabled at `DEFAULT_LEVEL_FILTER` when `RUST_LOG` is not set.
const DEFAULT_LOG_TARGETS: [&str; 2] = [env!("CARGO_CRATE_NAME"), "registry_model"];

const DEFAULT_NAMESPACE: &str = "default";

fn main() {
    init_logger();

    // Fail before building anything if the identity labels cannot be filled in.
    let config = match FactoryConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            error!("Usage: registry-factory <registry.yaml>");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&config, &path) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(config: &FactoryConfig, path: &str) -> registry_factory::Result<()> {
    let registry = read_registry(path)?;
    info!("Rendering registry '{}'", registry.object_name());

    let mut ctx = LoopContext::new(
        AppName::new(registry.object_name()),
        AppNamespace::new(registry.object_namespace().unwrap_or(DEFAULT_NAMESPACE)),
    );
    ctx.resource_cache_mut()
        .set(CacheEntry::Spec(Box::new(registry.clone())));

    let factory = KubeFactory::new(&ctx, config);
    let mut descriptors = factory.create_all()?;
    descriptors.push(Descriptor::Status(factory.create_status(&registry)));

    print!("{}", render_yaml(&descriptors)?);
    Ok(())
}

/// Extract the value of `RUST_LOG` if it exists, otherwise log `DEFAULT_LOG_TARGETS` at
/// `DEFAULT_LEVEL_FILTER`.
fn init_logger() {
    match std::env::var(env_logger::DEFAULT_FILTER_ENV).ok() {
        Some(_) => {
            // RUST_LOG exists; env_logger will use it.
            Builder::from_default_env().init();
        }
        None => {
            // RUST_LOG does not exist; use default log level for our crates only.
            let mut builder = Builder::new();
            for target in DEFAULT_LOG_TARGETS {
                builder.filter(Some(target), DEFAULT_LEVEL_FILTER);
            }
            builder.init();
        }
    }
}

#[test]
fn default_log_targets() {
    assert_eq!(DEFAULT_LOG_TARGETS, ["registry_factory", "registry_model"]);
}
