//! 全局注册表测试
//!
//! 全局注册表在同一个测试二进制内共享，测试之间用锁串行执行。

use locator_abstractions::ServiceRegistry;
use locator_composition::RegistryBuilder;
use locator_registry::{global, ServiceRegistryImpl};
use parking_lot::Mutex;
use std::sync::Arc;

static GLOBAL_LOCK: Mutex<()> = parking_lot::const_mutex(());

trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}

struct English;

impl Greeter for English {
    fn greet(&self) -> String {
        "hello".to_string()
    }
}

struct Stub;

impl Greeter for Stub {
    fn greet(&self) -> String {
        "stub".to_string()
    }
}

#[test]
fn test_global_returns_same_registry() {
    let _guard = GLOBAL_LOCK.lock();
    global().reset();

    global()
        .register_singleton::<dyn Greeter, _>(|| Ok(Arc::new(English) as Arc<dyn Greeter>))
        .unwrap();

    let first = global().resolve::<dyn Greeter>().unwrap();
    let second = global().resolve::<dyn Greeter>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.greet(), "hello");

    global().reset();
    assert!(global().is_empty());
}

#[test]
fn test_install_stub_into_global() {
    let _guard = GLOBAL_LOCK.lock();
    global().reset();

    global()
        .register_singleton::<dyn Greeter, _>(|| Ok(Arc::new(English) as Arc<dyn Greeter>))
        .unwrap();

    RegistryBuilder::new()
        .add_fn_module("stub", |registry: &ServiceRegistryImpl| {
            registry.register_instance::<dyn Greeter>(Arc::new(Stub))
        })
        .require::<dyn Greeter>()
        .install_into(global())
        .unwrap();

    assert_eq!(global().resolve::<dyn Greeter>().unwrap().greet(), "stub");

    global().reset();
}
