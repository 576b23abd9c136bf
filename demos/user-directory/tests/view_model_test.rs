//! 视图模型与注册表的集成测试

use async_trait::async_trait;
use locator_abstractions::ServiceRegistry;
use locator_common::RegistryError;
use locator_composition::{RegistryBuilder, RegistryModule};
use locator_registry::ServiceRegistryImpl;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use user_directory::{
    ApiService, FakeApiModule, FakeApiService, UserRepository, UserViewModel, UsersModule,
    ViewState,
};

fn fake_registry() -> ServiceRegistryImpl {
    RegistryBuilder::new()
        .strict()
        .add_module(FakeApiModule::default())
        .add_module(UsersModule)
        .require::<UserViewModel>()
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_view_model_loads_mock_users() {
    let registry = fake_registry();
    let view_model = registry.resolve::<UserViewModel>().unwrap();

    assert_eq!(view_model.state(), ViewState::Idle);
    let users = view_model.load_users().await.unwrap();

    assert_eq!(users, vec!["MockUser1", "MockUser2"]);
    assert_eq!(
        view_model.state(),
        ViewState::Loaded(vec!["MockUser1".to_string(), "MockUser2".to_string()])
    );
    assert_eq!(view_model.users(), users);
}

#[tokio::test]
async fn test_api_is_shared_and_repository_is_fresh() {
    let registry = fake_registry();

    let first_api = registry.resolve::<dyn ApiService>().unwrap();
    let second_api = registry.resolve::<dyn ApiService>().unwrap();
    assert!(Arc::ptr_eq(&first_api, &second_api));

    let first_repo = registry.resolve::<dyn UserRepository>().unwrap();
    let second_repo = registry.resolve::<dyn UserRepository>().unwrap();
    assert!(!Arc::ptr_eq(&first_repo, &second_repo));

    assert_eq!(
        first_repo.fetch_users().await.unwrap(),
        second_repo.fetch_users().await.unwrap()
    );
}

#[test]
fn test_users_module_requires_api() {
    let err = RegistryBuilder::new().add_module(UsersModule).build().unwrap_err();
    assert!(err.to_string().contains("ApiService"));
}

#[test]
fn test_view_model_without_api_reports_missing_capability() {
    let registry = ServiceRegistryImpl::new();
    UsersModule.register(&registry).unwrap();

    let err = match registry.resolve::<UserViewModel>() {
        Ok(_) => panic!("view model resolved without an api"),
        Err(err) => err,
    };
    assert!(matches!(err, RegistryError::Provider(_)));
    assert!(err.to_string().contains("ApiService"));
}

struct FlakyApi {
    calls: AtomicUsize,
}

#[async_trait]
impl ApiService for FlakyApi {
    async fn fetch_users(&self) -> anyhow::Result<Vec<String>> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            anyhow::bail!("service unavailable");
        }
        Ok(vec!["Recovered".to_string()])
    }
}

#[tokio::test]
async fn test_failed_load_sets_failed_state_and_can_retry() {
    let registry = ServiceRegistryImpl::new();
    UsersModule.register(&registry).unwrap();
    registry
        .register_instance::<dyn ApiService>(Arc::new(FlakyApi {
            calls: AtomicUsize::new(0),
        }))
        .unwrap();

    let view_model = registry.resolve::<UserViewModel>().unwrap();

    assert!(view_model.load_users().await.is_err());
    assert_eq!(
        view_model.state(),
        ViewState::Failed("service unavailable".to_string())
    );
    assert!(view_model.users().is_empty());

    assert_eq!(view_model.load_users().await.unwrap(), vec!["Recovered"]);
}

#[tokio::test]
async fn test_custom_fake_users() {
    let registry = RegistryBuilder::new()
        .add_module(FakeApiModule::new(FakeApiService::new(["Ada", "Grace"])))
        .add_module(UsersModule)
        .build()
        .unwrap();

    let view_model = registry.resolve::<UserViewModel>().unwrap();
    assert_eq!(view_model.load_users().await.unwrap(), vec!["Ada", "Grace"]);
}

#[tokio::test]
async fn test_concurrent_view_models_share_api() {
    let registry = fake_registry();

    let view_models: Vec<_> = (0..4)
        .map(|_| registry.resolve::<UserViewModel>().unwrap())
        .collect();
    let results = futures::future::join_all(view_models.iter().map(|vm| vm.load_users())).await;

    for result in results {
        assert_eq!(result.unwrap(), vec!["MockUser1", "MockUser2"]);
    }
    assert_eq!(registry.stats().cached_singletons, 1);
}
