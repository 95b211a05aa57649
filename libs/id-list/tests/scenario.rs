//! End-to-end use of ID lists as a caller sees them.

use idkit_id::{define_id, Identifier};
use idkit_id_list::{define_id_list, IdListError};

define_id!(UserId, "user");
define_id!(ProjectId, "project");
define_id_list!(UserIdList, UserId);
define_id_list!(ProjectIdList, ProjectId);

#[test]
fn full_and_partial_lists() {
    let anton = UserId::new();
    let markus = UserId::new();
    let paul = UserId::new();
    let tom = UserId::new();

    let full = UserIdList::from_ids([anton, markus, paul, tom]).unwrap();
    let partial = UserIdList::from_ids([anton, paul]).unwrap();

    let diff = full.diff(&partial);
    assert_eq!(diff.count(), 2);
    assert!(diff.contains_id(&markus));
    assert!(diff.contains_id(&tom));

    let common = full.intersect(&partial);
    assert_eq!(common.as_slice(), &[anton, paul]);

    assert!(partial.is_in_same_order(&full));

    let swapped = UserIdList::from_ids([paul, anton]).unwrap();
    assert!(!swapped.is_in_same_order(&full));
    assert!(swapped.is_equal_to(&partial));
}

#[test]
fn guards_chain_with_question_mark() {
    fn assign(members: &UserIdList, new_member: UserId) -> Result<UserIdList, IdListError> {
        members.must_not_contain_id(&new_member)?;
        let next = members.add_id(new_member)?;
        next.must_contain_id(&new_member)?;
        Ok(next)
    }

    let owner = UserId::new();
    let members = UserIdList::from_ids([owner]).unwrap();

    let guest = UserId::new();
    let members = assign(&members, guest).unwrap();
    assert_eq!(members.count(), 2);

    let err = assign(&members, owner).unwrap_err();
    assert!(err.is_guard_violation());
}

#[test]
fn mixed_runtime_input_is_split_by_kind() {
    let user = UserId::new();
    let project = ProjectId::new();
    let tagged = [user.to_any().to_string(), project.to_any().to_string()];

    let parsed: Vec<idkit_id::AnyId> = tagged.iter().map(|s| s.parse().unwrap()).collect();

    let err = UserIdList::from_any_ids(parsed.clone()).unwrap_err();
    assert!(matches!(err, IdListError::KindNotHandled { expected: "user", .. }));

    let users = UserIdList::from_any_ids(parsed.iter().filter(|id| id.is_kind::<UserId>()).cloned())
        .unwrap();
    let projects =
        ProjectIdList::from_any_ids(parsed.iter().filter(|id| id.is_kind::<ProjectId>()).cloned())
            .unwrap();

    assert_eq!(users.as_slice(), &[user]);
    assert_eq!(projects.as_slice(), &[project]);
}

#[test]
fn merged_team_lists_drop_repeats() {
    let shared = UserId::new();
    let backend = UserIdList::from_ids([UserId::new(), shared]).unwrap();
    let frontend = UserIdList::from_ids([shared, UserId::new(), UserId::new()]).unwrap();

    let everyone = UserIdList::from_id_lists([&backend, &frontend]);
    assert_eq!(everyone.count(), backend.count() + frontend.count() - 1);
    assert_eq!(everyone.id_at_position(1).unwrap(), &shared);
    everyone.must_be_equal_to(&UserIdList::from_id_lists([&frontend, &backend])).unwrap();

    let strings = everyone.ids_as_string_list();
    let reparsed = UserIdList::from_strings(&strings).unwrap();
    assert_eq!(reparsed.as_slice(), everyone.as_slice());
}
