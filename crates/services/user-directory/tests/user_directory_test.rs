//! User directory integration tests.

use std::sync::Arc;
use std::time::{Duration, Instant};

use mockall::predicate::eq;

use common::{init_tracing, AppError, LogConfig};
use domain::User;
use user_directory::{ConflictPolicy, DirectoryConfig, MockUserDao, UserDirectory};

fn ivan() -> User {
    User::of(1, "Ivan", "123")
}

fn lena() -> User {
    User::of(2, "Lena", "1234")
}

fn create_directory(dao: MockUserDao) -> UserDirectory {
    init_tracing(&LogConfig::default());
    UserDirectory::new(Arc::new(dao))
}

fn directory_with(users: Vec<User>) -> UserDirectory {
    let mut directory = create_directory(MockUserDao::new());
    directory.add(users);
    directory
}

#[test]
fn test_directory_from_env_starts_empty() {
    let mut directory = UserDirectory::from_env(Arc::new(MockUserDao::new()));

    assert!(directory.is_empty());
    assert!(!directory.config().log.level.is_empty());

    directory.add([ivan()]);
    assert_eq!(directory.login(Some("Ivan"), Some("123")).unwrap(), Some(&ivan()));
}

// =============================================================================
// Delete
// =============================================================================

#[test]
fn test_delete_forwards_to_dao() {
    let mut dao = MockUserDao::new();
    dao.expect_delete()
        .with(eq(ivan().id()))
        .times(2)
        .returning(|_| Ok(true));

    let mut directory = create_directory(dao);
    directory.add([ivan()]);

    let result = directory.delete(ivan().id()).unwrap();
    assert!(directory.delete(ivan().id()).unwrap());

    assert!(result);
    assert_eq!(directory.find_all(), &[ivan()]);
}

#[test]
fn test_delete_returns_dao_false() {
    let mut dao = MockUserDao::new();
    dao.expect_delete()
        .with(eq(99))
        .times(1)
        .returning(|_| Ok(false));

    let directory = create_directory(dao);

    assert!(!directory.delete(99).unwrap());
}

#[test]
fn test_delete_propagates_dao_error() {
    let mut dao = MockUserDao::new();
    dao.expect_delete()
        .returning(|_| Err(AppError::persistence("connection refused")));

    let directory = create_directory(dao);
    let result = directory.delete(1);

    assert!(matches!(result, Err(AppError::Persistence(msg)) if msg == "connection refused"));
}

// =============================================================================
// Find / add
// =============================================================================

#[test]
fn test_users_empty_if_no_user_added() {
    let directory = create_directory(MockUserDao::new());
    assert!(directory.find_all().is_empty());
}

#[test]
fn test_users_size_if_user_added() {
    let mut directory = create_directory(MockUserDao::new());

    assert!(directory.add([ivan()]));
    assert!(directory.add([lena()]));

    assert_eq!(directory.find_all().len(), 2);
}

#[test]
fn test_add_keeps_insertion_order_across_calls() {
    let mut directory = create_directory(MockUserDao::new());
    let third = User::of(3, "Petr", "pass");

    directory.add([lena(), ivan()]);
    directory.add(vec![third.clone()]);

    assert_eq!(directory.find_all(), &[lena(), ivan(), third]);
}

#[test]
fn test_add_empty_batch_changes_nothing() {
    let mut directory = directory_with(vec![ivan()]);

    assert!(!directory.add(Vec::new()));
    assert_eq!(directory.find_all(), &[ivan()]);
}

#[test]
fn test_find_all_is_stable_between_calls() {
    let directory = directory_with(vec![ivan(), lena()]);

    let first = directory.find_all().to_vec();
    let second = directory.find_all().to_vec();

    assert_eq!(first, second);
}

#[test]
fn test_round_trip_preserves_all_fields() {
    let user = User::of(42, "Anna", "s3cr3t");
    let directory = directory_with(vec![user.clone()]);

    assert_eq!(directory.find_all()[0], user);
    assert_eq!(directory.login(Some("Anna"), Some("s3cr3t")).unwrap(), Some(&user));
}

// =============================================================================
// Conversion
// =============================================================================

#[test]
fn test_users_converted_to_map_by_id() {
    let directory = directory_with(vec![ivan(), lena()]);

    let users = directory.get_all_converted_by_id().unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users.get(&1), Some(&ivan()));
    assert_eq!(users.get(&2), Some(&lena()));
}

#[test]
fn test_empty_directory_converts_to_empty_map() {
    let directory = create_directory(MockUserDao::new());
    assert!(directory.get_all_converted_by_id().unwrap().is_empty());
}

#[test]
fn test_duplicate_id_fails_fast_by_default() {
    let impostor = User::of(1, "Petr", "000");
    let directory = directory_with(vec![ivan(), lena(), impostor]);

    let err = directory.get_all_converted_by_id().unwrap_err();

    assert_eq!(err.code(), "CONFLICT");
    assert_eq!(
        err.to_string(),
        "Duplicate key 1 (attempted merging values User(id=1, name=Ivan, password=[REDACTED]) \
         and User(id=1, name=Petr, password=[REDACTED]))"
    );
}

#[test]
fn test_duplicate_id_last_write_wins() {
    let impostor = User::of(1, "Petr", "000");
    let config = DirectoryConfig::with_policy(ConflictPolicy::LastWriteWins);
    let mut directory = UserDirectory::with_config(Arc::new(MockUserDao::new()), config);
    directory.add([ivan(), lena(), impostor.clone()]);

    let users = directory.get_all_converted_by_id().unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users.get(&1), Some(&impostor));
    assert_eq!(directory.len(), 3);
}

// =============================================================================
// Login
// =============================================================================

#[test]
fn test_login_success_if_user_exists() {
    for _ in 0..5 {
        let directory = directory_with(vec![ivan()]);

        let user = directory.login(Some(ivan().name()), Some(ivan().password())).unwrap();

        assert_eq!(user, Some(&ivan()));
    }
}

#[test]
fn test_login_failure_if_wrong_password() {
    let directory = directory_with(vec![ivan()]);
    assert_eq!(directory.login(Some(ivan().name()), Some("dummy")).unwrap(), None);
}

#[test]
fn test_login_failure_if_wrong_name() {
    let directory = directory_with(vec![ivan()]);
    assert_eq!(directory.login(Some("dummy"), Some(ivan().password())).unwrap(), None);
}

#[test]
fn test_login_is_case_sensitive() {
    let directory = directory_with(vec![ivan()]);
    assert_eq!(directory.login(Some("ivan"), Some("123")).unwrap(), None);
}

#[test]
fn test_login_performance() {
    let directory = directory_with(vec![ivan(), lena()]);

    let started = Instant::now();
    let result = directory.login(Some(ivan().name()), Some("dummy")).unwrap();

    assert!(result.is_none());
    assert!(started.elapsed() < Duration::from_millis(200));
}

#[test]
fn test_login_rejects_unset_credentials() {
    let directory = directory_with(vec![ivan()]);

    let cases = [
        (None, Some("dummy")),
        (Some("dummy"), None),
        (None, None),
    ];

    for (name, password) in cases {
        let err = directory.login(name, password).unwrap_err();

        assert!(matches!(err, AppError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "Username or password is null!");
    }
}

#[test]
fn test_login_parameterized() {
    let cases = [
        ("Ivan", "123", Some(ivan())),
        ("Lena", "1234", Some(lena())),
        ("dummy", "123", None),
        ("Ivan", "dummy", None),
    ];

    for (name, password, expected) in cases {
        let directory = directory_with(vec![ivan(), lena()]);

        let user = directory.login(Some(name), Some(password)).unwrap();

        assert_eq!(user.cloned(), expected, "login({}, {})", name, password);
    }
}
