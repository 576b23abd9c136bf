//! 服务注册表的跨 crate 集成测试

use async_trait::async_trait;
use locator_abstractions::{RegistryOptions, Requirements, ServiceRegistry};
use locator_common::{Lifetime, RegistryError};
use locator_registry::ServiceRegistryImpl;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[async_trait]
trait ApiService: Send + Sync {
    async fn fetch_users(&self) -> anyhow::Result<Vec<String>>;
}

struct FakeApiService;

#[async_trait]
impl ApiService for FakeApiService {
    async fn fetch_users(&self) -> anyhow::Result<Vec<String>> {
        Ok(vec!["MockUser1".to_string(), "MockUser2".to_string()])
    }
}

struct UserRepository {
    api: Arc<dyn ApiService>,
}

impl UserRepository {
    async fn users(&self) -> anyhow::Result<Vec<String>> {
        self.api.fetch_users().await
    }
}

#[derive(Debug)]
struct Counter {
    value: u32,
}

fn register_user_services(registry: &ServiceRegistryImpl) {
    registry
        .register_singleton::<dyn ApiService, _>(|| {
            Ok(Arc::new(FakeApiService) as Arc<dyn ApiService>)
        })
        .unwrap();
    registry
        .register_with::<UserRepository, _>(Lifetime::Factory, |registry| {
            Ok(Arc::new(UserRepository {
                api: registry.resolve::<dyn ApiService>()?,
            }))
        })
        .unwrap();
}

#[tokio::test]
async fn test_fake_api_behind_factory_repository() {
    let registry = ServiceRegistryImpl::new();
    register_user_services(&registry);

    let first = registry.resolve::<UserRepository>().unwrap();
    let second = registry.resolve::<UserRepository>().unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first.api, &second.api));
    assert_eq!(first.users().await.unwrap(), vec!["MockUser1", "MockUser2"]);
}

#[test]
fn test_last_registration_wins() {
    let registry = ServiceRegistryImpl::new();
    registry
        .register_singleton::<Counter, _>(|| Ok(Arc::new(Counter { value: 0 })))
        .unwrap();
    registry
        .register_singleton::<Counter, _>(|| Ok(Arc::new(Counter { value: 5 })))
        .unwrap();

    assert_eq!(registry.resolve::<Counter>().unwrap().value, 5);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_last_factory_registration_wins() {
    let registry = ServiceRegistryImpl::new();
    registry
        .register_factory::<Counter, _>(|| Ok(Arc::new(Counter { value: 0 })))
        .unwrap();
    registry
        .register_factory::<Counter, _>(|| Ok(Arc::new(Counter { value: 5 })))
        .unwrap();

    let first = registry.resolve::<Counter>().unwrap();
    let second = registry.resolve::<Counter>().unwrap();
    assert_eq!(first.value, 5);
    assert_eq!(second.value, 5);
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_replacement_discards_cached_singleton() {
    let registry = ServiceRegistryImpl::new();
    registry
        .register_singleton::<Counter, _>(|| Ok(Arc::new(Counter { value: 0 })))
        .unwrap();
    let old = registry.resolve::<Counter>().unwrap();

    registry
        .register_singleton::<Counter, _>(|| Ok(Arc::new(Counter { value: 5 })))
        .unwrap();
    let new = registry.resolve::<Counter>().unwrap();

    assert_eq!(old.value, 0);
    assert_eq!(new.value, 5);
    assert!(!Arc::ptr_eq(&old, &new));
}

#[test]
fn test_strict_mode_keeps_first_registration() {
    let registry = ServiceRegistryImpl::with_options(RegistryOptions::strict());
    registry
        .register_singleton::<Counter, _>(|| Ok(Arc::new(Counter { value: 0 })))
        .unwrap();

    let err = registry
        .register_singleton::<Counter, _>(|| Ok(Arc::new(Counter { value: 5 })))
        .unwrap_err();

    assert!(matches!(err, RegistryError::DuplicateRegistration { .. }));
    assert_eq!(registry.resolve::<Counter>().unwrap().value, 0);
}

#[test]
fn test_reset_then_reregister() {
    let registry = ServiceRegistryImpl::new();
    register_user_services(&registry);
    let before = registry.resolve::<dyn ApiService>().unwrap();

    registry.reset();
    assert!(registry.is_empty());
    assert!(matches!(
        registry.resolve::<UserRepository>(),
        Err(err) if err.is_not_registered()
    ));

    register_user_services(&registry);
    let after = registry.resolve::<dyn ApiService>().unwrap();
    assert!(!Arc::ptr_eq(&before, &after));
}

#[test]
fn test_provider_failure_is_not_cached() {
    let registry = ServiceRegistryImpl::new();
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&attempts);

    registry
        .register_singleton::<Counter, _>(move || {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err("first attempt fails".into())
            } else {
                Ok(Arc::new(Counter { value: 7 }))
            }
        })
        .unwrap();

    let err = registry.resolve::<Counter>().unwrap_err();
    assert_eq!(err.to_string(), "first attempt fails");

    let first = registry.resolve::<Counter>().unwrap();
    let second = registry.resolve::<Counter>().unwrap();
    assert_eq!(first.value, 7);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[test]
fn test_verify_lists_every_missing_capability() {
    let registry = ServiceRegistryImpl::new();
    registry
        .register_singleton::<Counter, _>(|| Ok(Arc::new(Counter { value: 1 })))
        .unwrap();

    let requirements = Requirements::new()
        .require::<Counter>()
        .require::<dyn ApiService>()
        .require::<UserRepository>();

    match registry.verify(&requirements).unwrap_err() {
        RegistryError::MissingRegistrations { type_names } => {
            assert_eq!(type_names.len(), 2);
            assert!(type_names.iter().any(|name| name.contains("ApiService")));
            assert!(type_names.iter().any(|name| name.contains("UserRepository")));
        }
        other => panic!("unexpected error: {other}"),
    }

    register_user_services(&registry);
    registry.verify(&requirements).unwrap();
}

#[test]
fn test_clones_share_registrations() {
    let registry = ServiceRegistryImpl::new();
    let handle = registry.clone();

    handle
        .register_singleton::<Counter, _>(|| Ok(Arc::new(Counter { value: 3 })))
        .unwrap();

    let from_original = registry.resolve::<Counter>().unwrap();
    let from_clone = handle.resolve::<Counter>().unwrap();
    assert!(Arc::ptr_eq(&from_original, &from_clone));
}

#[tokio::test]
async fn test_singleton_shared_across_tasks() {
    let registry = ServiceRegistryImpl::new();
    let constructed = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&constructed);

    registry
        .register_singleton::<Counter, _>(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(Counter { value: 11 }))
        })
        .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = registry.clone();
            tokio::spawn(async move { registry.resolve::<Counter>().unwrap() })
        })
        .collect();

    let mut instances = Vec::new();
    for handle in handles {
        instances.push(handle.await.unwrap());
    }

    assert_eq!(constructed.load(Ordering::SeqCst), 1);
    assert!(instances.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
}
