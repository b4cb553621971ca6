pub mod patterns;

use crate::core::runner::{ExampleRunner, FnExample};
use crate::core::ConfigProvider;
use crate::utils::error::{CatalogError, Result};
use patterns::*;

pub const ITERATOR: &str = "Iterator pattern";
pub const CUSTOM_COLLECTION: &str = "Using a custom collection";
pub const OBSERVER: &str = "Observer pattern";
pub const NOTIFICATION_CENTER: &str = "Notification center";
pub const BUILDER: &str = "Builder pattern";
pub const PLAYWRIGHT: &str = "Playwright Pattern";
pub const FACTORY_METHOD: &str = "Factory method";
pub const SIMPLE_FACTORY: &str = "Simple Factory";
pub const ABSTRACT_FACTORY: &str = "Abstract Factory";
pub const PROTOTYPE: &str = "Prototype";
pub const BRIDGE: &str = "Bridge";
pub const NESTED_LETTERS: &str = "Nested letters";

/// 目錄中所有範例，依執行順序
pub const CATALOG: [&str; 12] = [
    ITERATOR,
    CUSTOM_COLLECTION,
    OBSERVER,
    NOTIFICATION_CENTER,
    BUILDER,
    PLAYWRIGHT,
    FACTORY_METHOD,
    SIMPLE_FACTORY,
    ABSTRACT_FACTORY,
    PROTOTYPE,
    BRIDGE,
    NESTED_LETTERS,
];

fn catalog_entry(name: &str, seed: Option<u64>) -> Option<FnExample> {
    let example = match name {
        ITERATOR => FnExample::new(ITERATOR, iterator::fibonacci_demo)
            .with_description("Fibonacci values through the Iterator trait"),
        CUSTOM_COLLECTION => {
            FnExample::new(CUSTOM_COLLECTION, move |out| iterator::random_demo(out, seed))
                .with_description("A bounded random sequence consumed with for-in")
        }
        OBSERVER => FnExample::new(OBSERVER, observer::publisher_demo)
            .with_description("Subscribers notified in registration order"),
        NOTIFICATION_CENTER => FnExample::new(NOTIFICATION_CENTER, observer::notification_center_demo)
            .with_description("String-keyed observer registry"),
        BUILDER => FnExample::new(BUILDER, builder::builder_demo)
            .with_description("Profiles assembled from presets"),
        PLAYWRIGHT => FnExample::new(PLAYWRIGHT, playwright::playwright_demo)
            .with_description("A director casting an actor and a prop"),
        FACTORY_METHOD => FnExample::new(FACTORY_METHOD, hero::factory_method_demo)
            .with_description("Default trait behavior shared by heroes"),
        SIMPLE_FACTORY => FnExample::new(SIMPLE_FACTORY, factory::simple_factory_demo)
            .with_description("Employee factory creating departments on demand"),
        ABSTRACT_FACTORY => FnExample::new(ABSTRACT_FACTORY, abstract_factory::abstract_factory_demo)
            .with_description("Factories producing matched product pairs"),
        PROTOTYPE => FnExample::new(PROTOTYPE, prototype::prototype_demo)
            .with_description("Copying a value object"),
        BRIDGE => FnExample::new(BRIDGE, bridge::bridge_demo)
            .with_description("A page rendering through a language strategy"),
        NESTED_LETTERS => FnExample::new(NESTED_LETTERS, letters::letters_demo)
            .with_description("A chain of letters unwrapped from the outside in"),
        _ => return None,
    };
    Some(example)
}

/// 依設定建立 runner：先套用選取，再排除 skip
pub fn build_runner(config: &impl ConfigProvider) -> Result<ExampleRunner> {
    for name in config
        .selected_examples()
        .iter()
        .chain(config.skipped_examples())
    {
        if !CATALOG.contains(&name.as_str()) {
            return Err(CatalogError::UnknownExample { name: name.clone() });
        }
    }

    let mut runner = ExampleRunner::new()
        .with_headers(config.show_headers())
        .with_monitoring(config.monitoring_enabled());

    let selected = config.selected_examples();
    for name in CATALOG {
        if !selected.is_empty() && !selected.iter().any(|s| s == name) {
            continue;
        }
        if config.skipped_examples().iter().any(|s| s == name) {
            tracing::info!("⏭️ Skipping example: {}", name);
            continue;
        }
        if let Some(example) = catalog_entry(name, config.random_seed()) {
            runner.add_example(Box::new(example));
        }
    }

    if runner.is_empty() {
        tracing::warn!("⚠️ No examples left to run after applying selection");
    }

    Ok(runner)
}
