//! # Service Registry - 싱글톤 의존성 주입 컨테이너
//!
//! `#[service]` / `#[repository]` 매크로가 생성한 등록 정보를 `inventory`로 수집하고,
//! 타입별로 하나의 인스턴스를 지연 생성하여 보관합니다.
//!
//! ## 동작 방식
//!
//! ```text
//! 1. 컴파일 타임
//!    ├─ #[service(name = "follow")]      → ServiceRegistration 제출
//!    └─ #[repository(name = "user", ..)] → RepositoryRegistration 제출
//!
//! 2. 애플리케이션 시작
//!    ├─ ServiceLocator::set(Arc<Database>)     인프라 컴포넌트 수동 등록
//!    ├─ ServiceLocator::set(Arc<RedisClient>)
//!    └─ ServiceLocator::initialize_all()        리포지토리 → 서비스 순으로 생성
//!
//! 3. 요청 처리
//!    └─ FollowService::instance() → ServiceLocator::get::<FollowService>()
//! ```
//!
//! 타입 이름 접미사(`Service`, `Repository`)를 제거한 소문자 이름이
//! 매크로의 `name` 인자와 매칭됩니다. `FollowService` → `"follow"`.
//!
//! ## 순환 참조
//!
//! 생성 중인 타입을 `initializing` 집합으로 추적하며, 같은 타입을 다시 요청하면
//! 즉시 패닉합니다. 서비스 그래프는 항상 단방향이어야 합니다.

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use crate::utils::display_terminal::{print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete, print_step_start, print_sub_task};

/// 비즈니스 로직 서비스 공통 인터페이스
///
/// `#[service]` 매크로가 적용된 구조체가 자동 구현합니다.
#[async_trait]
pub trait Service: Send + Sync {
    /// 서비스의 고유 이름
    fn name(&self) -> &str;

    /// 서비스 초기화 훅
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 데이터 액세스 리포지토리 공통 인터페이스
///
/// `#[repository]` 매크로가 적용된 구조체가 자동 구현합니다.
#[async_trait]
pub trait Repository: Send + Sync {
    /// 리포지토리의 고유 이름
    fn name(&self) -> &str;

    /// 연결된 MongoDB 컬렉션 이름
    fn collection_name(&self) -> &str;

    /// 리포지토리 초기화 훅
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 서비스 생성자 등록 정보
pub struct ServiceRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 생성자 등록 정보
pub struct RepositoryRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 정리된 이름 → 서비스 등록 정보
static SERVICE_NAME_CACHE: Lazy<HashMap<String, fn() -> Box<dyn Any + Send + Sync>>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<ServiceRegistration>()
        .map(|registration| (strip_component_suffix(registration.name), registration.constructor))
        .collect();

    print_cache_initialized("Service", cache.len());
    cache
});

/// 정리된 이름 → 리포지토리 등록 정보
static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, fn() -> Box<dyn Any + Send + Sync>>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
        .map(|registration| (strip_component_suffix(registration.name), registration.constructor))
        .collect();

    print_cache_initialized("Repository", cache.len());
    cache
});

/// 등록 이름에서 `_service` / `_repository` 접미사를 제거합니다.
fn strip_component_suffix(name: &str) -> String {
    name.strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name)
        .to_string()
}

/// 타입 경로의 마지막 세그먼트만 남깁니다. `a::b::FollowService` → `FollowService`
fn short_type_name(type_name: &str) -> &str {
    type_name.rsplit("::").next().unwrap_or(type_name)
}

/// 컴포넌트 종류
#[derive(Debug, Clone, Copy, PartialEq)]
enum ComponentKind {
    Repository,
    Service,
}

impl ComponentKind {
    fn suffix(self) -> &'static str {
        match self {
            ComponentKind::Repository => "Repository",
            ComponentKind::Service => "Service",
        }
    }

    fn cache(self) -> &'static HashMap<String, fn() -> Box<dyn Any + Send + Sync>> {
        match self {
            ComponentKind::Repository => &*REPOSITORY_NAME_CACHE,
            ComponentKind::Service => &*SERVICE_NAME_CACHE,
        }
    }

    /// 타입 이름으로 컴포넌트 종류와 등록 키를 결정합니다.
    fn classify(short_name: &str) -> Option<(Self, String)> {
        [ComponentKind::Repository, ComponentKind::Service]
            .into_iter()
            .find_map(|kind| {
                short_name
                    .strip_suffix(kind.suffix())
                    .map(|entity| (kind, entity.to_lowercase()))
            })
    }
}

/// 전역 싱글톤 컨테이너
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    initializing: RwLock<HashSet<TypeId>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    /// 타입 `T`의 싱글톤 인스턴스를 반환합니다.
    ///
    /// 이미 생성된 인스턴스가 있으면 그대로 반환하고, 없으면 등록된 생성자로
    /// 만들어 캐시합니다. 등록되지 않은 타입이나 순환 참조는 시작 시점의
    /// 설정 오류이므로 패닉합니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if let Some(instance) = Self::cached::<T>(type_id) {
            return instance;
        }

        {
            let mut initializing = LOCATOR.initializing.write().unwrap_or_else(|e| e.into_inner());
            if !initializing.insert(type_id) {
                eprintln!("❌ Circular dependency detected for type: {}", type_name);
                panic!("Circular dependency detected: {} is already being initialized", type_name);
            }
        }

        let result = std::panic::catch_unwind(|| Self::create::<T>(type_id, type_name));

        LOCATOR.initializing
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&type_id);

        match result {
            Ok(instance) => instance,
            Err(e) => {
                eprintln!("ERROR: Failed to create instance for {}: {:?}", type_name, e);
                panic!("Failed to create instance for {}", type_name);
            }
        }
    }

    fn cached<T: 'static + Send + Sync>(type_id: TypeId) -> Option<Arc<T>> {
        let instances = LOCATOR.instances.read().unwrap_or_else(|e| e.into_inner());
        instances
            .get(&type_id)
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    fn create<T: 'static + Send + Sync>(type_id: TypeId, type_name: &str) -> Arc<T> {
        // 생성자가 다른 컴포넌트를 get()으로 요청하므로 락을 잡지 않은 채 호출해야 합니다.
        let short_name = short_type_name(type_name);
        let Some((kind, entity_name)) = ComponentKind::classify(short_name) else {
            panic!("Service not found: {}. Make sure it's registered with #[service] or #[repository] macro, or manually registered with ServiceLocator::set()", type_name);
        };

        let Some(constructor) = kind.cache().get(&entity_name) else {
            panic!("No {} found for entity: {}", kind.suffix().to_lowercase(), entity_name);
        };

        let boxed_instance = constructor();
        let Ok(arc_instance) = boxed_instance.downcast::<Arc<T>>() else {
            panic!("Type mismatch for {}: {}", kind.suffix().to_lowercase(), short_name);
        };

        let mut instances = LOCATOR.instances.write().unwrap_or_else(|e| e.into_inner());
        let instance = instances
            .entry(type_id)
            .or_insert_with(|| (*arc_instance).clone() as Arc<dyn Any + Send + Sync>)
            .clone();

        instance
            .downcast::<T>()
            .unwrap_or_else(|_| panic!("Type mismatch in ServiceLocator: {}", short_name))
    }

    /// 외부에서 만든 인스턴스(Database, RedisClient 등)를 수동 등록합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_id = TypeId::of::<T>();
        println!("📦 Registering: {}", short_type_name(std::any::type_name::<T>()));

        let mut instances = LOCATOR.instances.write().unwrap_or_else(|e| e.into_inner());
        instances.insert(type_id, instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 모든 리포지토리와 서비스를 미리 생성합니다.
    ///
    /// 리포지토리를 먼저 만든 뒤 서비스를 만들어, 첫 요청에서의 지연 생성을 없앱니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repo_count = Self::construct_all(
            1,
            "Repository",
            inventory::iter::<RepositoryRegistration>()
                .map(|r| (r.name, r.constructor))
                .collect(),
        );

        let service_count = Self::construct_all(
            2,
            "Service",
            inventory::iter::<ServiceRegistration>()
                .map(|r| (r.name, r.constructor))
                .collect(),
        );

        print_final_summary(repo_count, service_count);

        Ok(())
    }

    fn construct_all(
        step: u8,
        label: &str,
        registrations: Vec<(&'static str, fn() -> Box<dyn Any + Send + Sync>)>,
    ) -> usize {
        let count = registrations.len();
        if count == 0 {
            return 0;
        }

        print_step_start(step, &format!("Creating {} instances", label));
        for (name, constructor) in registrations {
            print_sub_task(name, "Creating...");
            let _instance = constructor();
            print_sub_task(name, "✓ Created");
        }
        print_step_complete(step, &format!("{} instances created", label), count);

        count
    }
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_component_suffix() {
        assert_eq!(strip_component_suffix("follow_service"), "follow");
        assert_eq!(strip_component_suffix("user_repository"), "user");
        assert_eq!(strip_component_suffix("user"), "user");
    }

    #[test]
    fn test_classify_component() {
        assert_eq!(
            ComponentKind::classify("FollowService"),
            Some((ComponentKind::Service, "follow".to_string()))
        );
        assert_eq!(
            ComponentKind::classify("UserRepository"),
            Some((ComponentKind::Repository, "user".to_string()))
        );
        assert_eq!(ComponentKind::classify("Database"), None);
    }

    #[test]
    fn test_manually_registered_instance_is_returned() {
        struct ManualComponent(u32);

        ServiceLocator::set(Arc::new(ManualComponent(7)));
        let instance = ServiceLocator::get::<ManualComponent>();

        assert_eq!(instance.0, 7);
    }
}
