use apple_catcher::compute::{init_state, new_player};
use apple_catcher::entities::*;

#[test]
fn entity_clone_and_eq() {
    assert_eq!(ItemKind::Apple, ItemKind::Apple);
    assert_ne!(ItemKind::Apple, ItemKind::Bomb);
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
    assert_ne!(ActorKind::Player, ActorKind::Item(ItemKind::Apple));
    assert_ne!(ActorKind::Item(ItemKind::Apple), ActorKind::Item(ItemKind::Bomb));
}

#[test]
fn vector_addition() {
    let v = Vector2i::new(3, -4) + Vector2i::new(10, 20);
    assert_eq!(v, Vector2i::new(13, 16));
    assert_eq!(Vector2i::default(), Vector2i::new(0, 0));
}

#[test]
fn item_kind_names() {
    assert_eq!(ItemKind::Apple.name(), "apple");
    assert_eq!(ItemKind::Bomb.name(), "bomb");
}

#[test]
fn actor_kind_helpers() {
    let p = new_player();
    assert!(p.is_player());
    assert_eq!(p.item_kind(), None);

    let bomb = Actor {
        kind: ActorKind::Item(ItemKind::Bomb),
        ..p
    };
    assert!(!bomb.is_player());
    assert_eq!(bomb.item_kind(), Some(ItemKind::Bomb));
}

#[test]
fn state_lookups() {
    let mut s = init_state(640, 480, true);
    s.actors.push(Actor {
        kind: ActorKind::Item(ItemKind::Apple),
        pos: Vector2i::new(1, 2),
        alive: true,
        anim: 0,
        speed: 4,
    });
    assert!(s.player().is_some());
    assert_eq!(s.items().count(), 1);

    s.actors.remove(0);
    assert!(s.player().is_none());
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(640, 480, true);
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.actors[0].pos.x = 99;
    cloned.score = 999;
    cloned.actors.push(new_player());

    assert_eq!(original.actors[0].pos.x, 240);
    assert_eq!(original.score, 0);
    assert_eq!(original.actors.len(), 1);
}
