//! # Service Registry - 이름 기반 의존성 주입 컨테이너
//!
//! 애플리케이션의 객체 그래프(리포지토리, 서비스)를 구성하는 DI 컨테이너입니다.
//! Spring Framework의 `BeanFactory`처럼 이름으로 등록된 팩토리를 보관하고,
//! 요청 시점에 의존성을 먼저 해결한 뒤 인스턴스를 생성합니다.
//!
//! 전역 static 없이 `ServiceRegistry::new()`로 명시적으로 생성하며,
//! 애플리케이션은 시작 시 하나를 만들어 와이어링 루틴에 넘깁니다.
//! 테스트는 각자 독립된 레지스트리를 생성합니다.
//!
//! ## Spring과의 비교
//!
//! | Spring 개념 | 이 시스템 | 비고 |
//! |-------------|-----------|------|
//! | `BeanDefinition` | `ServiceDescriptor` | 팩토리 + 의존성 이름 + 스코프 |
//! | `registerBeanDefinition()` | `register(name)...factory(..)` | 타입 안전한 빌더 |
//! | `registerSingleton()` | `register_instance()` | 이미 생성된 인프라 객체 |
//! | `getBean(name, Class)` | `resolve::<T>(name)` | 이름 + 타입으로 조회 |
//! | `@Scope("singleton")` | 기본 동작 | 첫 해결 시 캐시 |
//! | `@Scope("prototype")` | `.transient()` | 매번 새 인스턴스 |
//! | `NoSuchBeanDefinitionException` | `RegistryError::NotFound` | |
//! | `BeanCurrentlyInCreationException` | `RegistryError::CycleDetected` | 경로 포함 |
//! | `BeanCreationException` | `RegistryError::Construction` | 원본 에러 보존 |
//!
//! ## 해결(Resolution) 과정
//!
//! ```text
//! resolve("postService")
//!    ├─ 싱글톤 캐시 확인 → 있으면 즉시 반환
//!    ├─ 해결 경로에 이미 있는 이름인가? → CycleDetected(a -> b -> a)
//!    ├─ 디스크립터 조회 → 없으면 NotFound
//!    ├─ 선언된 순서대로 의존성 깊이 우선 해결
//!    │    ├─ postRepository
//!    │    └─ commentRepository
//!    ├─ 팩토리 호출 (해결된 의존성 전달)
//!    └─ 싱글톤이면 캐시에 저장 후 반환
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::registry::ServiceRegistry;
//!
//! let registry = ServiceRegistry::new();
//!
//! registry.register_instance("database", database.clone());
//!
//! registry
//!     .register("postRepository")
//!     .depends_on("database")
//!     .factory(|deps| {
//!         let db: Arc<Database> = deps.get("database")?;
//!         Ok(Arc::new(MongoPostRepository::new(&db)) as Arc<dyn PostRepository>)
//!     });
//!
//! let posts: Arc<dyn PostRepository> = registry.resolve("postRepository")?;
//! ```
//!
//! ## 동시성
//!
//! 내부 맵은 `RwLock`으로 보호되며, 첫 해결(팩토리 호출이 필요한 경우)은
//! 레지스트리 단위의 뮤텍스로 직렬화됩니다. 따라서 여러 스레드가 동시에 같은
//! 싱글톤을 처음 요청해도 팩토리는 한 번만 호출됩니다.
//! 팩토리 내부에서 레지스트리를 다시 호출해서는 안 됩니다.

use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use log::{debug, warn};
use thiserror::Error;

/// 팩토리가 반환할 수 있는 에러 타입
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// 타입이 지워진 서비스 인스턴스
type Instance = Arc<dyn Any + Send + Sync>;

type Factory = Box<dyn Fn(&Dependencies<'_>) -> Result<Instance, BoxError> + Send + Sync>;

/// 레지스트리 에러
///
/// 해결 과정에서 발생한 에러는 감싸지지 않고 바깥 해결로 그대로 전파됩니다.
/// 즉 `a -> b`에서 `b`의 팩토리가 실패하면 `a`의 호출자는
/// `Construction { name: "b", .. }`를 받습니다.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// 등록되지 않은 이름
    #[error("Service not found: {0}")]
    NotFound(String),

    /// 의존성 순환. 순환 경로 전체를 포함합니다. (예: `a -> b -> a`)
    #[error("Circular dependency detected: {}", .0.join(" -> "))]
    CycleDetected(Vec<String>),

    /// 팩토리 실패. 원본 에러는 `source`로 보존됩니다.
    #[error("Failed to construct service '{name}': {source}")]
    Construction {
        name: String,
        #[source]
        source: BoxError,
    },

    /// 저장된 인스턴스의 타입이 요청한 타입과 다름
    #[error("Type mismatch for service '{name}': expected {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
    },

    /// 팩토리가 선언하지 않은 의존성을 요청함
    #[error("Service '{service}' requested undeclared dependency '{dependency}'")]
    UndeclaredDependency {
        service: String,
        dependency: String,
    },
}

/// 등록된 서비스의 설명자
///
/// 이름, 선언된 의존성 이름(순서 유지), 스코프, 팩토리를 보관합니다.
pub struct ServiceDescriptor {
    name: String,
    dependency_names: Vec<String>,
    singleton: bool,
    factory: Factory,
}

impl ServiceDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dependency_names(&self) -> &[String] {
        &self.dependency_names
    }

    pub fn is_singleton(&self) -> bool {
        self.singleton
    }
}

impl fmt::Debug for ServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceDescriptor")
            .field("name", &self.name)
            .field("dependency_names", &self.dependency_names)
            .field("singleton", &self.singleton)
            .finish_non_exhaustive()
    }
}

/// 팩토리에 전달되는 해결된 의존성 목록
///
/// 위치가 아니라 선언한 이름과 타입으로 의존성을 꺼냅니다.
///
/// ```rust,ignore
/// .factory(|deps| {
///     let users: Arc<dyn UserRepository> = deps.get("userRepository")?;
///     let tokens: Arc<TokenService> = deps.get("tokenService")?;
///     Ok(Arc::new(AuthService::new(users, tokens)))
/// })
/// ```
pub struct Dependencies<'a> {
    service: &'a str,
    resolved: Vec<(String, Instance)>,
}

impl Dependencies<'_> {
    /// 선언된 의존성을 이름과 타입으로 가져옵니다.
    ///
    /// # Errors
    ///
    /// * `UndeclaredDependency` - `depends_on`으로 선언하지 않은 이름
    /// * `TypeMismatch` - 저장된 인스턴스가 `T`가 아님
    pub fn get<T>(&self, name: &str) -> Result<T, RegistryError>
    where
        T: Clone + Send + Sync + 'static,
    {
        let (_, instance) = self
            .resolved
            .iter()
            .find(|(dependency, _)| dependency == name)
            .ok_or_else(|| RegistryError::UndeclaredDependency {
                service: self.service.to_string(),
                dependency: name.to_string(),
            })?;

        downcast_instance(name, instance)
    }
}

/// 서비스 등록 빌더
///
/// `ServiceRegistry::register`가 반환하며, `factory`를 호출해야 등록이 완료됩니다.
/// 기본 스코프는 싱글톤입니다.
#[must_use = "factory()를 호출해야 서비스가 등록됩니다"]
pub struct Registration<'r> {
    registry: &'r ServiceRegistry,
    name: String,
    dependency_names: Vec<String>,
    singleton: bool,
}

impl<'r> Registration<'r> {
    /// 의존성 이름을 하나 추가합니다. 선언 순서대로 해결됩니다.
    pub fn depends_on(mut self, name: impl Into<String>) -> Self {
        self.dependency_names.push(name.into());
        self
    }

    /// 여러 의존성 이름을 한 번에 추가합니다.
    pub fn depends_on_all<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependency_names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn singleton(mut self) -> Self {
        self.singleton = true;
        self
    }

    /// 해결할 때마다 새 인스턴스를 생성합니다.
    pub fn transient(mut self) -> Self {
        self.singleton = false;
        self
    }

    /// 팩토리를 지정하고 등록을 완료합니다.
    ///
    /// 같은 이름이 이미 있으면 덮어쓰며, 캐시된 싱글톤도 함께 제거됩니다.
    /// 의존성 이름은 여기서 검증하지 않고 해결 시점에 검증합니다.
    pub fn factory<T, F>(self, factory: F) -> &'r ServiceRegistry
    where
        T: Send + Sync + 'static,
        F: Fn(&Dependencies<'_>) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        let descriptor = ServiceDescriptor {
            name: self.name,
            dependency_names: self.dependency_names,
            singleton: self.singleton,
            factory: Box::new(move |deps| factory(deps).map(|value| Arc::new(value) as Instance)),
        };

        self.registry.insert_descriptor(descriptor);
        self.registry
    }
}

/// 이름 기반 서비스 레지스트리
///
/// 디스크립터 맵과 싱글톤 캐시를 보관합니다. 프로세스 수명 동안 유지되며,
/// `clear()` 외에 개별 제거는 없습니다.
pub struct ServiceRegistry {
    descriptors: RwLock<HashMap<String, Arc<ServiceDescriptor>>>,
    singletons: RwLock<HashMap<String, Instance>>,
    /// 첫 해결(팩토리 호출)을 직렬화
    resolution: Mutex<()>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self {
            descriptors: RwLock::new(HashMap::new()),
            singletons: RwLock::new(HashMap::new()),
            resolution: Mutex::new(()),
        }
    }

    /// 서비스 등록을 시작합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// registry
    ///     .register("postService")
    ///     .depends_on("postRepository")
    ///     .depends_on("commentRepository")
    ///     .factory(|deps| {
    ///         Ok(Arc::new(PostService::new(
    ///             deps.get("postRepository")?,
    ///             deps.get("commentRepository")?,
    ///         )))
    ///     });
    /// ```
    pub fn register(&self, name: impl Into<String>) -> Registration<'_> {
        Registration {
            registry: self,
            name: name.into(),
            dependency_names: Vec::new(),
            singleton: true,
        }
    }

    /// 이미 생성된 인스턴스를 싱글톤으로 등록합니다.
    ///
    /// 데이터베이스 핸들처럼 비동기로 준비되는 인프라 객체를 넣을 때 사용합니다.
    /// Spring의 `registerSingleton()`과 같은 역할입니다.
    pub fn register_instance<T>(&self, name: impl Into<String>, value: T)
    where
        T: Send + Sync + 'static,
    {
        let name = name.into();
        let instance: Instance = Arc::new(value);
        let cached = instance.clone();

        self.insert_descriptor(ServiceDescriptor {
            name: name.clone(),
            dependency_names: Vec::new(),
            singleton: true,
            factory: Box::new(move |_| Ok(cached.clone())),
        });

        write(&self.singletons).insert(name, instance);
    }

    /// 이름으로 서비스를 해결하고 `T`로 꺼냅니다.
    ///
    /// 트레이트 객체는 `Arc<dyn Trait>` 형태로 등록하고 같은 타입으로 요청합니다.
    /// 싱글톤은 매번 같은 `Arc`를 반환하므로 `Arc::ptr_eq`로 동일성을 확인할 수 있습니다.
    ///
    /// # Errors
    ///
    /// * `NotFound` - 등록되지 않은 이름 (팩토리는 호출되지 않음)
    /// * `CycleDetected` - 의존성 순환
    /// * `Construction` - 팩토리 실패
    /// * `TypeMismatch` - 저장된 타입과 `T`가 다름
    pub fn resolve<T>(&self, name: &str) -> Result<T, RegistryError>
    where
        T: Clone + Send + Sync + 'static,
    {
        let instance = self.resolve_instance(name)?;
        downcast_instance(name, &instance)
    }

    /// 타입을 지정하지 않고 해결합니다.
    pub fn resolve_instance(&self, name: &str) -> Result<Arc<dyn Any + Send + Sync>, RegistryError> {
        if let Some(cached) = self.cached(name) {
            return Ok(cached);
        }

        let _guard = self
            .resolution
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut path = Vec::new();
        self.resolve_on_path(name, &mut path)
    }

    /// 해당 이름이 등록되어 있는지 확인합니다.
    pub fn has(&self, name: &str) -> bool {
        read(&self.descriptors).contains_key(name)
    }

    /// 모든 디스크립터와 싱글톤 캐시를 비웁니다.
    pub fn clear(&self) {
        write(&self.descriptors).clear();
        write(&self.singletons).clear();
        debug!("Service registry cleared");
    }

    /// 등록된 이름을 정렬하여 반환합니다.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = read(&self.descriptors).keys().cloned().collect();
        names.sort();
        names
    }

    /// 등록된 디스크립터를 반환합니다.
    pub fn descriptor(&self, name: &str) -> Option<Arc<ServiceDescriptor>> {
        read(&self.descriptors).get(name).cloned()
    }

    pub fn len(&self) -> usize {
        read(&self.descriptors).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert_descriptor(&self, descriptor: ServiceDescriptor) {
        let name = descriptor.name.clone();
        debug!(
            "📦 Registering '{}' ({}, deps: {:?})",
            name,
            if descriptor.singleton { "singleton" } else { "transient" },
            descriptor.dependency_names
        );

        let previous = write(&self.descriptors).insert(name.clone(), Arc::new(descriptor));
        if previous.is_some() {
            write(&self.singletons).remove(&name);
            debug!("Descriptor '{}' overwritten", name);
        }
    }

    fn cached(&self, name: &str) -> Option<Instance> {
        read(&self.singletons).get(name).cloned()
    }

    /// `path`는 현재 해결 중인 이름의 스택입니다.
    fn resolve_on_path(&self, name: &str, path: &mut Vec<String>) -> Result<Instance, RegistryError> {
        if let Some(cached) = self.cached(name) {
            return Ok(cached);
        }

        if let Some(start) = path.iter().position(|entry| entry == name) {
            let mut cycle = path[start..].to_vec();
            cycle.push(name.to_string());
            warn!("❌ Circular dependency detected: {}", cycle.join(" -> "));
            return Err(RegistryError::CycleDetected(cycle));
        }

        let descriptor = self.descriptor(name).ok_or_else(|| {
            warn!("Service not found: {}", name);
            RegistryError::NotFound(name.to_string())
        })?;

        path.push(name.to_string());
        let constructed = self.construct(&descriptor, path);
        path.pop();
        let instance = constructed?;

        if descriptor.singleton {
            let mut singletons = write(&self.singletons);
            return Ok(singletons
                .entry(name.to_string())
                .or_insert(instance)
                .clone());
        }

        Ok(instance)
    }

    fn construct(
        &self,
        descriptor: &ServiceDescriptor,
        path: &mut Vec<String>,
    ) -> Result<Instance, RegistryError> {
        let mut resolved = Vec::with_capacity(descriptor.dependency_names.len());
        for dependency in &descriptor.dependency_names {
            let instance = self.resolve_on_path(dependency, path)?;
            resolved.push((dependency.clone(), instance));
        }

        let dependencies = Dependencies {
            service: &descriptor.name,
            resolved,
        };

        debug!("Constructing '{}'", descriptor.name);

        (descriptor.factory)(&dependencies).map_err(|error| match error.downcast::<RegistryError>() {
            Ok(registry_error) => *registry_error,
            Err(source) => RegistryError::Construction {
                name: descriptor.name.clone(),
                source,
            },
        })
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("services", &self.names())
            .field("cached", &read(&self.singletons).len())
            .finish()
    }
}

fn downcast_instance<T>(name: &str, instance: &Instance) -> Result<T, RegistryError>
where
    T: Clone + Send + Sync + 'static,
{
    let any: &(dyn Any + Send + Sync) = &**instance;
    any.downcast_ref::<T>()
        .cloned()
        .ok_or_else(|| RegistryError::TypeMismatch {
            name: name.to_string(),
            expected: type_name::<T>(),
        })
}

fn read<K, V>(lock: &RwLock<HashMap<K, V>>) -> std::sync::RwLockReadGuard<'_, HashMap<K, V>> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<K, V>(lock: &RwLock<HashMap<K, V>>) -> std::sync::RwLockWriteGuard<'_, HashMap<K, V>> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct Counter {
        id: usize,
    }

    #[derive(Debug)]
    struct Holder {
        inner: Arc<Counter>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("connection refused")]
    struct ConnectionRefused;

    fn counting_factory(
        calls: &Arc<AtomicUsize>,
    ) -> impl Fn(&Dependencies<'_>) -> Result<Arc<Counter>, BoxError> + Send + Sync + 'static {
        let calls = calls.clone();
        move |_| {
            let id = calls.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(Arc::new(Counter { id }))
        }
    }

    #[test]
    fn test_singleton_returns_identical_instance() {
        let registry = ServiceRegistry::new();
        let calls = Arc::new(AtomicUsize::new(0));
        registry.register("counter").factory(counting_factory(&calls));

        let first: Arc<Counter> = registry.resolve("counter").unwrap();
        let second: Arc<Counter> = registry.resolve("counter").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_transient_produces_fresh_instances() {
        let registry = ServiceRegistry::new();
        let calls = Arc::new(AtomicUsize::new(0));
        registry
            .register("x")
            .transient()
            .factory(counting_factory(&calls));

        let ids: Vec<usize> = (0..3)
            .map(|_| registry.resolve::<Arc<Counter>>("x").unwrap().id)
            .collect();

        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_unregistered_name_returns_not_found() {
        let registry = ServiceRegistry::new();
        let calls = Arc::new(AtomicUsize::new(0));
        registry.register("other").factory(counting_factory(&calls));

        let result = registry.resolve::<Arc<Counter>>("missing");

        assert!(matches!(result, Err(RegistryError::NotFound(ref name)) if name == "missing"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_shared_singleton_dependency_constructed_once() {
        let registry = ServiceRegistry::new();
        let c_calls = Arc::new(AtomicUsize::new(0));

        registry.register("c").factory(counting_factory(&c_calls));
        registry
            .register("b")
            .depends_on("c")
            .factory(|deps| Ok(Arc::new(Holder { inner: deps.get("c")? })));
        registry
            .register("a")
            .depends_on_all(["b", "c"])
            .factory(|deps| {
                let b: Arc<Holder> = deps.get("b")?;
                let c: Arc<Counter> = deps.get("c")?;
                Ok((b, c))
            });

        let (b, c): (Arc<Holder>, Arc<Counter>) = registry.resolve("a").unwrap();

        assert_eq!(c_calls.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&b.inner, &c));
    }

    #[test]
    fn test_consumer_receives_cached_singleton() {
        let registry = ServiceRegistry::new();
        registry
            .register("a")
            .factory(|_| Ok(Arc::new(Counter { id: 1 })));
        registry
            .register("b")
            .depends_on("a")
            .factory(|deps| Ok(Arc::new(Holder { inner: deps.get("a")? })));

        let b: Arc<Holder> = registry.resolve("b").unwrap();
        let a: Arc<Counter> = registry.resolve("a").unwrap();

        assert!(Arc::ptr_eq(&b.inner, &a));
        assert_eq!(a.id, 1);
    }

    #[test]
    fn test_transient_with_singleton_dependency() {
        let registry = ServiceRegistry::new();
        let calls = Arc::new(AtomicUsize::new(0));
        registry.register("shared").factory(counting_factory(&calls));
        registry
            .register("holder")
            .depends_on("shared")
            .transient()
            .factory(|deps| Ok(Arc::new(Holder { inner: deps.get("shared")? })));

        let first: Arc<Holder> = registry.resolve("holder").unwrap();
        let second: Arc<Holder> = registry.resolve("holder").unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first.inner, &second.inner));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clear_removes_descriptors_and_cache() {
        let registry = ServiceRegistry::new();
        let calls = Arc::new(AtomicUsize::new(0));
        registry.register("counter").factory(counting_factory(&calls));
        registry.resolve::<Arc<Counter>>("counter").unwrap();

        registry.clear();

        assert!(!registry.has("counter"));
        assert!(registry.is_empty());
        assert!(matches!(
            registry.resolve::<Arc<Counter>>("counter"),
            Err(RegistryError::NotFound(_))
        ));
    }

    #[test]
    fn test_has_reports_registration() {
        let registry = ServiceRegistry::new();
        assert!(!registry.has("counter"));

        registry
            .register("counter")
            .factory(|_| Ok(Arc::new(Counter { id: 0 })));

        assert!(registry.has("counter"));
        assert_eq!(registry.names(), vec!["counter".to_string()]);
    }

    #[test]
    fn test_cycle_detected_with_path() {
        let registry = ServiceRegistry::new();
        registry
            .register("a")
            .depends_on("b")
            .factory(|_| Ok(Arc::new(Counter { id: 1 })));
        registry
            .register("b")
            .depends_on("a")
            .factory(|_| Ok(Arc::new(Counter { id: 2 })));

        let result = registry.resolve::<Arc<Counter>>("a");

        match result {
            Err(RegistryError::CycleDetected(path)) => assert_eq!(path, vec!["a", "b", "a"]),
            other => panic!("Expected CycleDetected, got {:?}", other),
        }
    }

    #[test]
    fn test_self_cycle_detected() {
        let registry = ServiceRegistry::new();
        registry
            .register("a")
            .depends_on("a")
            .factory(|_| Ok(Arc::new(Counter { id: 1 })));

        let error = registry.resolve::<Arc<Counter>>("a").unwrap_err();

        assert_eq!(error.to_string(), "Circular dependency detected: a -> a");
    }

    #[test]
    fn test_cycle_path_starts_at_reentered_name() {
        let registry = ServiceRegistry::new();
        registry
            .register("root")
            .depends_on("a")
            .factory(|_| Ok(Arc::new(Counter { id: 0 })));
        registry
            .register("a")
            .depends_on("b")
            .factory(|_| Ok(Arc::new(Counter { id: 1 })));
        registry
            .register("b")
            .depends_on("a")
            .factory(|_| Ok(Arc::new(Counter { id: 2 })));

        let error = registry.resolve::<Arc<Counter>>("root").unwrap_err();

        assert!(matches!(error, RegistryError::CycleDetected(ref path) if path == &["a", "b", "a"]));
    }

    #[test]
    fn test_construction_error_preserves_source() {
        let registry = ServiceRegistry::new();
        registry
            .register("database")
            .factory::<Arc<Counter>, _>(|_| Err(ConnectionRefused.into()));

        let error = registry.resolve::<Arc<Counter>>("database").unwrap_err();

        match &error {
            RegistryError::Construction { name, source } => {
                assert_eq!(name, "database");
                assert!(source.downcast_ref::<ConnectionRefused>().is_some());
            }
            other => panic!("Expected Construction, got {:?}", other),
        }
        assert!(error.source().is_some());
    }

    #[test]
    fn test_nested_failure_propagates_unchanged() {
        let registry = ServiceRegistry::new();
        registry
            .register("inner")
            .factory::<Arc<Counter>, _>(|_| Err(ConnectionRefused.into()));
        registry
            .register("outer")
            .depends_on("inner")
            .factory(|deps| Ok(Arc::new(Holder { inner: deps.get("inner")? })));

        let error = registry.resolve::<Arc<Holder>>("outer").unwrap_err();

        assert!(matches!(error, RegistryError::Construction { ref name, .. } if name == "inner"));
        assert!(!registry.has("missing"));
    }

    #[test]
    fn test_missing_dependency_propagates_not_found() {
        let registry = ServiceRegistry::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = calls.clone();
        registry
            .register("service")
            .depends_on("repository")
            .factory(move |_| {
                counted.fetch_add(1, Ordering::SeqCst);
                Ok(Arc::new(Counter { id: 1 }))
            });

        let error = registry.resolve::<Arc<Counter>>("service").unwrap_err();

        assert!(matches!(error, RegistryError::NotFound(ref name) if name == "repository"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_undeclared_dependency_rejected() {
        let registry = ServiceRegistry::new();
        registry
            .register("a")
            .factory(|_| Ok(Arc::new(Counter { id: 1 })));
        registry
            .register("b")
            .factory(|deps| Ok(Arc::new(Holder { inner: deps.get("a")? })));

        let error = registry.resolve::<Arc<Holder>>("b").unwrap_err();

        assert!(matches!(
            error,
            RegistryError::UndeclaredDependency { ref service, ref dependency }
                if service == "b" && dependency == "a"
        ));
    }

    #[test]
    fn test_type_mismatch_reported() {
        let registry = ServiceRegistry::new();
        registry
            .register("counter")
            .factory(|_| Ok(Arc::new(Counter { id: 1 })));

        let error = registry.resolve::<Arc<Holder>>("counter").unwrap_err();

        assert!(matches!(error, RegistryError::TypeMismatch { ref name, .. } if name == "counter"));
    }

    #[test]
    fn test_register_instance_is_cached_singleton() {
        let registry = ServiceRegistry::new();
        let instance = Arc::new(Counter { id: 7 });
        registry.register_instance("config", instance.clone());

        let resolved: Arc<Counter> = registry.resolve("config").unwrap();

        assert!(registry.has("config"));
        assert!(Arc::ptr_eq(&resolved, &instance));
        assert!(registry.descriptor("config").unwrap().is_singleton());
    }

    #[test]
    fn test_reregistration_replaces_cached_instance() {
        let registry = ServiceRegistry::new();
        registry
            .register("counter")
            .factory(|_| Ok(Arc::new(Counter { id: 1 })));
        assert_eq!(registry.resolve::<Arc<Counter>>("counter").unwrap().id, 1);

        registry
            .register("counter")
            .factory(|_| Ok(Arc::new(Counter { id: 2 })));

        assert_eq!(registry.resolve::<Arc<Counter>>("counter").unwrap().id, 2);
    }

    #[test]
    fn test_concurrent_first_resolution_constructs_once() {
        let registry = Arc::new(ServiceRegistry::new());
        let calls = Arc::new(AtomicUsize::new(0));
        registry.register("counter").factory(counting_factory(&calls));

        let resolved: Vec<Arc<Counter>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| registry.resolve::<Arc<Counter>>("counter").unwrap()))
                .collect();
            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(resolved.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
    }

    #[test]
    fn test_descriptor_keeps_declared_order() {
        let registry = ServiceRegistry::new();
        registry
            .register("postService")
            .depends_on("postRepository")
            .depends_on("commentRepository")
            .transient()
            .factory(|_| Ok(Arc::new(Counter { id: 0 })));

        let descriptor = registry.descriptor("postService").unwrap();

        assert_eq!(descriptor.name(), "postService");
        assert_eq!(descriptor.dependency_names(), ["postRepository", "commentRepository"]);
        assert!(!descriptor.is_singleton());
    }
}
