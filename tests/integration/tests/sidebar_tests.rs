//! Sidebar integration tests
//!
//! Runs the display list pipeline and permission gating against an in-memory
//! store, the same way a client embeds the crates.
//!
//! Run with: cargo test -p integration-tests --test sidebar_tests

use std::sync::Arc;

use integration_tests::{context, context_with_config, display_names, id, names, TestStore, ME};
use sidebar_common::AppConfig;
use sidebar_core::{
    Channel, ChannelType, TeamMembership, UserProfile, UserStatus,
};
use sidebar_service::{
    build_display_list, can_create, can_delete, can_manage, enrich, ChannelCategory,
    SidebarService,
};

// ============================================================================
// Fixtures
// ============================================================================

fn team_store() -> TestStore {
    TestStore::new(ME)
        .with_teammate(2, "bob", TeamMembership::Active)
        .with_teammate(3, "alice", TeamMembership::Active)
        .with_teammate(4, "carol", TeamMembership::NotMember)
        .with_teammate(5, "dave", TeamMembership::Unknown)
        .with_teammate(6, "erin", TeamMembership::Active)
        .with_visibility(6, false)
        .with_status(2, UserStatus::Online)
        .with_favorite(12)
        .with_favorite(40)
}

fn other(channel_id: i64, name: &str) -> Channel {
    Channel {
        id: Some(id(channel_id)),
        name: name.to_string(),
        display_name: name.to_string(),
        channel_type: ChannelType::Other("G".to_string()),
        ..Channel::default()
    }
}

fn team_channels() -> Vec<Channel> {
    vec![
        Channel::new_open(id(10), "channel-10", "Channel 10"),
        Channel::new_direct(id(30), id(ME), id(2)),
        Channel::new_open(id(11), "channel-2", "Channel 2"),
        Channel::new_private(id(20), "secret", "Secret"),
        Channel::new_direct(id(31), id(4), id(ME)),
        Channel::new_open(id(12), "town-square", "Town Square"),
        Channel::new_direct(id(32), id(ME), id(5)),
        Channel::new_private(id(21), "beta", "beta"),
        Channel::new_direct(id(33), id(ME), id(6)),
        other(40, "group-40"),
        other(41, "group-41"),
    ]
}

// ============================================================================
// Display List Tests
// ============================================================================

#[test]
fn test_full_sidebar() -> anyhow::Result<()> {
    let store = Arc::new(team_store());
    let ctx = context(&store)?;

    let list = build_display_list(&ctx, &team_channels());

    assert_eq!(names(&list.favorite_channels), ["town-square", "group-40"]);
    assert_eq!(names(&list.public_channels), ["channel-2", "channel-10"]);
    assert_eq!(names(&list.private_channels), ["beta", "secret"]);
    // alice has no channel yet and gets a placeholder
    assert_eq!(names(&list.direct_channels), ["1__3", "1__2"]);
    assert_eq!(display_names(&list.direct_channels), ["alice", "bob"]);
    assert_eq!(names(&list.direct_non_team_channels), ["1__4"]);
    assert_eq!(list.len(), 9);

    Ok(())
}

#[test]
fn test_favorite_sections_are_exclusive() -> anyhow::Result<()> {
    let store = Arc::new(team_store());
    let ctx = context(&store)?;
    store.set_favorite(30, true);
    store.set_favorite(20, true);

    let list = build_display_list(&ctx, &team_channels());

    // Favorites keep the global order: public, private, direct, unknown types
    assert_eq!(
        names(&list.favorite_channels),
        ["town-square", "secret", "1__2", "group-40"]
    );
    assert_eq!(names(&list.private_channels), ["beta"]);
    assert_eq!(names(&list.direct_channels), ["1__3"]);

    let mut seen: Vec<&str> = [
        ChannelCategory::Favorite,
        ChannelCategory::Public,
        ChannelCategory::Private,
        ChannelCategory::Direct,
        ChannelCategory::DirectNonTeam,
    ]
    .into_iter()
    .flat_map(|category| names(list.section(category)))
    .collect();
    let total = seen.len();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), total);

    Ok(())
}

#[test]
fn test_visibility_changes_apply_on_next_build() -> anyhow::Result<()> {
    let store = Arc::new(team_store());
    let ctx = context(&store)?;
    let channels = team_channels();

    store.set_visibility(2, false);
    store.set_visibility(3, false);
    let list = build_display_list(&ctx, &channels);
    assert!(list.direct_channels.is_empty());

    store.set_visibility(6, true);
    let list = build_display_list(&ctx, &channels);
    assert_eq!(names(&list.direct_channels), ["1__6"]);

    Ok(())
}

#[test]
fn test_unknown_membership_is_not_shown() -> anyhow::Result<()> {
    let store = Arc::new(team_store());
    let ctx = context(&store)?;
    let service = SidebarService::new(&ctx);

    let dave = enrich(&ctx, &Channel::new_direct(id(32), id(ME), id(5)));
    assert_eq!(dave.display_name, "dave");
    assert_eq!(service.category(&dave), None);

    let carol = enrich(&ctx, &Channel::new_direct(id(31), id(ME), id(4)));
    assert_eq!(service.category(&carol), Some(ChannelCategory::DirectNonTeam));

    Ok(())
}

#[test]
fn test_placeholder_channel() -> anyhow::Result<()> {
    let store = Arc::new(team_store());
    let ctx = context(&store)?;

    let list = build_display_list(&ctx, &team_channels());
    let placeholder = &list.direct_channels[0];

    assert_eq!(placeholder.id, None);
    assert!(placeholder.fake);
    assert_eq!(placeholder.name, "1__3");
    assert_eq!(placeholder.teammate_id, Some(id(3)));
    assert_eq!(placeholder.status, Some(UserStatus::Offline));
    assert_eq!(placeholder.last_post_at, 0);
    assert_eq!(placeholder.total_msg_count, 0);

    // Placeholders can never be favorites
    let service = SidebarService::new(&ctx);
    assert!(!service.is_favorite_channel(placeholder));
    assert!(service.is_direct_channel_for_user(placeholder, id(3)));

    Ok(())
}

#[test]
fn test_no_placeholder_when_channel_exists() -> anyhow::Result<()> {
    let store = Arc::new(TestStore::new(ME).with_teammate(2, "bob", TeamMembership::Active));
    let ctx = context(&store)?;

    // Stored name uses the higher id first; it still identifies the pair
    let channel = Channel {
        name: "2__1".to_string(),
        ..Channel::new_direct(id(30), id(ME), id(2))
    };
    let list = build_display_list(&ctx, &[channel]);

    assert_eq!(list.direct_channels.len(), 1);
    assert_eq!(list.direct_channels[0].id, Some(id(30)));
    assert!(!list.direct_channels[0].fake);

    Ok(())
}

#[test]
fn test_unresolvable_direct_channels_stay_visible() -> anyhow::Result<()> {
    let store = Arc::new(TestStore::new(ME).with_favorite(52));
    let ctx = context(&store)?;

    let self_dm = Channel {
        id: Some(id(50)),
        name: "1__1".to_string(),
        channel_type: ChannelType::Direct,
        ..Channel::default()
    };
    let garbage = Channel {
        id: Some(id(51)),
        name: "not-a-dm".to_string(),
        channel_type: ChannelType::Direct,
        ..Channel::default()
    };
    let favorite_garbage = Channel {
        id: Some(id(52)),
        name: "also-not-a-dm".to_string(),
        ..garbage.clone()
    };

    let list = build_display_list(&ctx, &[self_dm, garbage, favorite_garbage]);

    assert_eq!(names(&list.favorite_channels), ["also-not-a-dm"]);
    assert_eq!(list.favorite_channels[0].teammate_id, None);
    // Listed as plain direct channels, without teammate details
    assert_eq!(names(&list.direct_channels), ["1__1", "not-a-dm"]);
    assert!(list.direct_channels.iter().all(|c| c.teammate_id.is_none()));
    assert_eq!(list.len(), 3);

    Ok(())
}

#[test]
fn test_build_is_deterministic_and_leaves_input_untouched() -> anyhow::Result<()> {
    let store = Arc::new(team_store());
    let ctx = context(&store)?;

    let channels = team_channels();
    let before = channels.clone();
    let first = build_display_list(&ctx, &channels);
    assert_eq!(channels, before);

    let mut shuffled = channels.clone();
    shuffled.reverse();
    shuffled.rotate_left(4);
    assert_eq!(build_display_list(&ctx, &shuffled), first);
    assert_eq!(build_display_list(&ctx, &channels), first);

    Ok(())
}

#[test]
fn test_locale_is_read_per_build() -> anyhow::Result<()> {
    let store = Arc::new(TestStore::new(ME));
    let ctx = context(&store)?;
    let channels = [
        Channel::new_open(id(10), "upper", "Apple"),
        Channel::new_open(id(11), "lower", "apple"),
    ];

    let list = build_display_list(&ctx, &channels);
    assert_eq!(names(&list.public_channels), ["lower", "upper"]);

    store.set_locale("da-DK");
    let list = build_display_list(&ctx, &channels);
    assert_eq!(names(&list.public_channels), ["upper", "lower"]);

    Ok(())
}

// ============================================================================
// Enrichment Tests
// ============================================================================

#[test]
fn test_enrichment_uses_configured_name_display() -> anyhow::Result<()> {
    let store = Arc::new(
        TestStore::new(ME)
            .with_profile(UserProfile {
                id: id(2),
                username: "jdoe".to_string(),
                nickname: "JD".to_string(),
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
            })
            .with_status(2, UserStatus::Dnd),
    );
    let config = AppConfig::from_source(|key| match key {
        "TEAMMATE_NAME_DISPLAY" => Some("full_name".to_string()),
        "UNKNOWN_USER_LABEL" => Some("Former member".to_string()),
        _ => None,
    })?;
    let ctx = context_with_config(&store, &config.sidebar)?;

    let known = enrich(&ctx, &Channel::new_direct(id(30), id(ME), id(2)));
    assert_eq!(known.display_name, "Jane Doe");
    assert_eq!(known.status, Some(UserStatus::Dnd));

    let unknown = enrich(&ctx, &Channel::new_direct(id(31), id(ME), id(7)));
    assert_eq!(unknown.display_name, "Former member");
    assert_eq!(unknown.teammate_id, Some(id(7)));
    assert_eq!(unknown.status, Some(UserStatus::Offline));

    let open = Channel::new_open(id(10), "town-square", "Town Square");
    assert_eq!(enrich(&ctx, &open), open);

    Ok(())
}

#[test]
fn test_display_list_serializes_for_clients() -> anyhow::Result<()> {
    let store = Arc::new(team_store().with_status(3, UserStatus::Away));
    let ctx = context(&store)?;

    let list = build_display_list(&ctx, &team_channels());
    let json = serde_json::to_value(&list)?;

    let placeholder = &json["direct_channels"][0];
    assert!(placeholder.get("id").is_none());
    assert_eq!(placeholder["type"], "D");
    assert_eq!(placeholder["fake"], true);
    assert_eq!(placeholder["status"], "away");
    assert_eq!(placeholder["teammate_id"], "3");
    assert_eq!(json["public_channels"][0]["id"], "11");

    Ok(())
}

// ============================================================================
// Permission Tests
// ============================================================================

#[test]
fn test_permissions_from_environment() -> anyhow::Result<()> {
    let config = AppConfig::from_source(|key| {
        let value = match key {
            "LICENSED" => "true",
            "RESTRICT_PUBLIC_CHANNEL_CREATION" => "system_admin",
            "RESTRICT_PRIVATE_CHANNEL_DELETION" => "team_admin",
            "RESTRICT_PUBLIC_CHANNEL_MANAGEMENT" => "owners_only",
            _ => return None,
        };
        Some(value.to_string())
    })?;
    let policy = &config.policy;
    let public = Channel::new_open(id(10), "town-square", "Town Square");
    let private = Channel::new_private(id(20), "secret", "Secret");
    let direct = Channel::new_direct(id(30), id(ME), id(2));

    assert!(!can_create(policy, &ChannelType::Open, true, false));
    assert!(can_create(policy, &ChannelType::Open, false, true));
    assert!(can_create(policy, &ChannelType::Private, false, false));

    // Unrecognized level fails open
    assert!(can_manage(policy, &public, false, false));

    assert!(!can_delete(policy, &private, false, true));
    assert!(can_delete(policy, &private, true, false));
    assert!(can_delete(policy, &direct, false, false));

    Ok(())
}

#[test]
fn test_unlicensed_ignores_restrictions() -> anyhow::Result<()> {
    let config = AppConfig::from_source(|key| {
        key.starts_with("RESTRICT_").then(|| "system_admin".to_string())
    })?;
    let policy = &config.policy;
    assert!(!policy.licensed);

    for channel in team_channels() {
        assert!(can_create(policy, &channel.channel_type, false, false));
        assert!(can_manage(policy, &channel, false, false));
        assert!(can_delete(policy, &channel, false, false));
    }

    Ok(())
}
