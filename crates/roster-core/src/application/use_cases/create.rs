//! Create-employee orchestration.

use std::sync::Arc;

use serde_json::json;
use tracing::{info, instrument};

use crate::application::ports::{EmployeeStore, StorageError};
use crate::application::providers::{Clock, IdProvider};
use crate::domain::codes::field;
use crate::domain::validation::{Attributes, CommandValidator};
use crate::domain::{CreateEmployeeCommand, Employee, Versioned};
use crate::error::{CoreError, CoreResult};

/// Creates a validated, version-0 employee record.
///
/// Either exactly one record is persisted or nothing is written at all; on
/// validation failure the full violation list propagates unchanged.
pub struct CreateEmployee {
    validator: CommandValidator<CreateEmployeeCommand>,
    store: Arc<dyn EmployeeStore>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdProvider>,
}

impl CreateEmployee {
    pub fn new(
        validator: CommandValidator<CreateEmployeeCommand>,
        store: Arc<dyn EmployeeStore>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdProvider>,
    ) -> Self {
        Self {
            validator,
            store,
            clock,
            ids,
        }
    }

    #[instrument(skip_all, fields(country = %command.country))]
    pub fn execute(&self, command: CreateEmployeeCommand) -> CoreResult<Versioned<Employee>> {
        // 1. Validate; no partial writes can have happened yet.
        self.validator.validate(&command)?;

        // 2-3. Fresh identity and time, version 0, created == updated.
        let record = Versioned::new(
            self.ids.generate(),
            self.clock.now(),
            Employee {
                email: command.email,
                country: command.country,
                salary: command.salary,
            },
        );

        // 4. Persist; a unique-key clash gets entity context attached here.
        self.store.create(&record).map_err(|err| match err {
            StorageError::DuplicateKey => CoreError::Duplicated {
                kind: Employee::KIND,
                attributes: Attributes::from([(field::ID.to_string(), json!(record.id))]),
            },
            other => other.into(),
        })?;

        info!(id = %record.id, "employee created");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use mockall::predicate::eq;
    use uuid::Uuid;

    use super::*;
    use crate::application::ports::{MockEmployeeStore, MockHiringConfig};
    use crate::application::providers::{MockClock, MockIdProvider};
    use crate::domain::codes;
    use crate::domain::model::Range;
    use crate::domain::rules::{CountryAllowed, EmailNotTaken, SalaryInRange};
    use crate::testkit;

    struct Deps {
        store: MockEmployeeStore,
        hiring: MockHiringConfig,
        clock: MockClock,
        ids: MockIdProvider,
    }

    /// Mocks configured so a valid command passes every rule.
    fn valid_deps(id: Uuid) -> Deps {
        let mut store = MockEmployeeStore::new();
        store.expect_exists_by_email().return_const(Ok(false));

        let mut hiring = MockHiringConfig::new();
        hiring
            .expect_allowed_countries()
            .return_const(BTreeSet::from(["USA".to_string(), "CA".to_string()]));
        hiring
            .expect_salary_range()
            .return_const(Range::new(Some(200.0), Some(300.0)));

        let mut clock = MockClock::new();
        clock.expect_now().return_const(testkit::fixed_instant());

        let mut ids = MockIdProvider::new();
        ids.expect_generate().return_const(id);

        Deps {
            store,
            hiring,
            clock,
            ids,
        }
    }

    fn use_case(deps: Deps) -> CreateEmployee {
        let store = Arc::new(deps.store);
        let hiring: Arc<dyn crate::application::ports::HiringConfig> = Arc::new(deps.hiring);

        let validator = CommandValidator::builder()
            .rule(EmailNotTaken::new(store.clone()))
            .rule(CountryAllowed::new(Arc::clone(&hiring)))
            .rule(SalaryInRange::new(hiring))
            .build();

        CreateEmployee::new(validator, store, Arc::new(deps.clock), Arc::new(deps.ids))
    }

    fn violation_codes(err: CoreError) -> Vec<&'static str> {
        match err {
            CoreError::Validation(errors) => errors.into_iter().map(|e| e.code.code).collect(),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn valid_command_persists_a_version_zero_record() {
        let id = Uuid::new_v4();
        let mut deps = valid_deps(id);

        let command = testkit::create_command();
        let expected = Versioned::new(
            id,
            testkit::fixed_instant(),
            Employee {
                email: command.email.clone(),
                country: command.country.clone(),
                salary: command.salary,
            },
        );

        deps.store
            .expect_create()
            .with(eq(expected.clone()))
            .times(1)
            .return_const(Ok(()));

        let record = use_case(deps).execute(command).unwrap();

        assert_eq!(record, expected);
        assert_eq!(record.version, 0);
        assert_eq!(record.created_at, record.updated_at);
    }

    #[test]
    fn single_failing_rule_yields_exactly_that_violation() {
        let mut deps = valid_deps(Uuid::new_v4());
        deps.store.expect_create().times(0);

        let command = testkit::create_command_with("a@b.com", "ES", 250.0);
        let err = use_case(deps).execute(command).unwrap_err();

        assert_eq!(violation_codes(err), vec!["COUNTRY_NOT_ALLOWED"]);
    }

    #[test]
    fn independent_failures_are_reported_together_in_rule_order() {
        let mut deps = valid_deps(Uuid::new_v4());
        deps.store.expect_create().times(0);

        // Disallowed country AND out-of-range salary at once.
        let command = testkit::create_command_with("a@b.com", "ES", 500.0);
        let err = use_case(deps).execute(command).unwrap_err();

        assert_eq!(
            violation_codes(err),
            vec!["COUNTRY_NOT_ALLOWED", "SALARY_OUT_OF_RANGE"]
        );
    }

    #[test]
    fn taken_email_is_a_validation_failure_not_a_conflict() {
        let mut deps = valid_deps(Uuid::new_v4());
        deps.store.checkpoint();
        deps.store.expect_exists_by_email().return_const(Ok(true));
        deps.store.expect_create().times(0);

        let err = use_case(deps).execute(testkit::create_command()).unwrap_err();

        assert_eq!(violation_codes(err), vec![codes::EMAIL_ALREADY_EXISTS.code]);
    }

    #[test]
    fn duplicate_key_from_the_store_surfaces_as_duplicated() {
        let id = Uuid::new_v4();
        let mut deps = valid_deps(id);
        deps.store
            .expect_create()
            .return_const(Err(StorageError::DuplicateKey));

        let err = use_case(deps).execute(testkit::create_command()).unwrap_err();

        match err {
            CoreError::Duplicated { kind, attributes } => {
                assert_eq!(kind, Employee::KIND);
                assert_eq!(attributes[field::ID], json!(id));
            }
            other => panic!("expected Duplicated, got {other:?}"),
        }
    }

    #[test]
    fn backend_failure_on_write_is_internal() {
        let mut deps = valid_deps(Uuid::new_v4());
        deps.store
            .expect_create()
            .return_const(Err(StorageError::Backend("disk full".into())));

        let err = use_case(deps).execute(testkit::create_command()).unwrap_err();
        assert!(matches!(err, CoreError::Internal { .. }));
    }
}
