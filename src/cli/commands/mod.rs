//! CLI command implementations

pub mod tenpista;
pub mod tx;

use console::style;

use crate::api::{ApiClient, ApiError, HttpTenpistaApi, HttpTransactionApi};
use crate::cli::GlobalOpts;
use crate::core::{CollectionCache, Config};
use crate::forms::FormError;
use crate::store::{TenpistaStore, TransactionStore};

/// Resolve the effective config for this invocation
fn load_config(global: &GlobalOpts) -> Config {
    Config::load().with_api_url(global.api_url.clone())
}

pub(crate) fn tenpista_store(global: &GlobalOpts) -> TenpistaStore<HttpTenpistaApi> {
    let config = load_config(global);
    let cache = CollectionCache::new(Config::cache_dir(), config.cache_ttl_secs);
    TenpistaStore::new(HttpTenpistaApi::new(ApiClient::new(config.api_url)), cache)
}

pub(crate) fn transaction_store(global: &GlobalOpts) -> TransactionStore<HttpTransactionApi> {
    let config = load_config(global);
    let cache = CollectionCache::new(Config::cache_dir(), config.cache_ttl_secs);
    TransactionStore::new(
        HttpTransactionApi::new(ApiClient::new(config.api_url)),
        cache,
    )
}

/// Surface an API failure the way the lists do: the shared error banner on
/// stderr, then a nonzero exit
pub(crate) fn api_failure(error: ApiError) -> miette::Report {
    eprintln!("{}", crate::views::error_banner(&error));
    miette::miette!("la operación no pudo completarse")
}

/// Surface a form failure: field errors line by line, submit errors as the
/// form-level message
pub(crate) fn form_failure(error: FormError) -> miette::Report {
    match error {
        FormError::Invalid(fields) => {
            for field in &fields {
                eprintln!("{} {}", style("!").red(), field.message);
            }
            miette::miette!("los datos ingresados no son válidos")
        }
        FormError::Submit(message) => miette::miette!("{}", message),
    }
}
