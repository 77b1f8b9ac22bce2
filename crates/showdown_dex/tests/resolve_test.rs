//! End-to-end resolution against the fixture data tables.
//!
//! Covers memoization identity, placeholder records, forme derivation,
//! variable-power moves, generation-dependent abilities and categories, and
//! the generic effect dispatch order.

mod common;

use std::rc::Rc;

use common::{fixture_data, fixture_dex};
use serde_json::json;
use showdown_dex::{
    AbilitySlot, AnyEffect, Category, Dex, DexConfig, EffectRecord, EffectType, Facing,
    MoveFlags, SpriteOptions, SpriteSet,
};

// ============================================================================
// Caching
// ============================================================================

#[test]
fn test_repeated_lookups_share_instance() {
    let dex = fixture_dex();

    let a = dex.get_species("Pikachu");
    let b = dex.get_species("pikachu");
    assert!(Rc::ptr_eq(&a, &b), "species lookups should be memoized");

    let a = dex.get_move("Thunderbolt");
    let b = dex.get_move("  thunderbolt ");
    assert!(Rc::ptr_eq(&a, &b), "move lookups should be memoized");

    let a = dex.get_item("Leftovers");
    let b = dex.get_item("leftovers");
    assert!(Rc::ptr_eq(&a, &b), "item lookups should be memoized");

    let a = dex.get_ability("Flash Fire");
    let b = dex.get_ability("flashfire");
    assert!(Rc::ptr_eq(&a, &b), "ability lookups should be memoized");
}

#[test]
fn test_alias_resolves_to_cached_target() {
    let dex = fixture_dex();
    let via_alias = dex.get_species("ZardMX");
    let direct = dex.get_species("Charizard-Mega-X");
    assert!(Rc::ptr_eq(&via_alias, &direct));
    assert_eq!(via_alias.name, "Charizard-Mega-X");
}

#[test]
fn test_attachments_stick_to_shared_record() {
    let dex = fixture_dex();
    dex.get_species("pikachu").attach("hpcolor", json!("g"));
    assert_eq!(dex.get_species("Pikachu").attachment("hpcolor"), Some(json!("g")));
}

// ============================================================================
// Placeholders
// ============================================================================

#[test]
fn test_placeholders_are_well_formed() {
    let dex = fixture_dex();

    let species = dex.get_species("Notamon");
    assert!(!species.exists);
    assert_eq!(species.id, "notamon");
    assert_eq!(species.name, "Notamon");
    assert_eq!(species.spriteid, "notamon");
    assert_eq!(species.effect_type, EffectType::Template);

    let mv = dex.get_move("Not <A> Move");
    assert!(!mv.exists);
    assert_eq!(mv.id, "notamove");
    assert_eq!(mv.name, "Not &lt;A&gt; Move");
    assert_eq!(mv.category, Category::Effect);
    assert_eq!(mv.crit_ratio, 1);
    assert!(mv.secondaries.is_empty());

    let item = dex.get_item("Mystery Orb");
    assert!(!item.exists);
    assert_eq!(item.effect_type, EffectType::Item);
    assert_eq!(item.gen, 3);

    let ability = dex.get_ability("Mystery Aura");
    assert!(!ability.exists);
    assert_eq!(ability.effect_type, EffectType::Ability);
    assert_eq!(ability.gen, 0);

    let ty = dex.get_type("Sound");
    assert!(!ty.exists);
    assert_eq!(ty.id, "Sound");
    assert_eq!(ty.effect_type, EffectType::Type);

    let effect = dex.get_effect("Mystery Field");
    assert!(!effect.exists());
    assert_eq!(effect.id(), "mysteryfield");
    assert_eq!(effect.category(), Category::Effect);
}

#[test]
fn test_empty_input() {
    let dex = fixture_dex();
    assert_eq!(dex.get_species("").id, "");
    assert_eq!(dex.get_move("").id, "");
    assert!(!dex.get_effect("").exists());
}

// ============================================================================
// Species
// ============================================================================

#[test]
fn test_charizard_mega_x() {
    let dex = fixture_dex();
    let mega = dex.get_species("charizardmegax");
    assert!(mega.exists);
    assert_eq!(mega.base_species, "Charizard");
    assert_eq!(mega.formeid, "-megax");
    assert_eq!(mega.spriteid, "charizard-megax");
    assert_eq!(mega.gen, 6);
    assert!(mega.is_mega(), "Mega-X should be flagged as a mega");
    assert!(mega.battle_only(), "megas only exist in battle");
    assert_eq!(mega.forme_letter, "M");
}

#[test]
fn test_unknown_mega_derives_forme() {
    let dex = fixture_dex();
    let mega = dex.get_species("Blastoise-Mega");
    assert!(!mega.exists);
    assert_eq!(mega.base_species, "blastoise");
    assert_eq!(mega.formeid, "-mega");
    assert_eq!(mega.spriteid, "blastoise-mega");
    assert_eq!(mega.gen, 6);
    assert!(mega.is_mega());

    let primal = dex.get_species("kyogreprimal");
    assert_eq!(primal.formeid, "-primal");
    assert!(primal.is_primal() && primal.battle_only());

    let alola = dex.get_species("Vulpix-Alola");
    assert_eq!(alola.spriteid, "vulpix-alola");
    assert_eq!(alola.gen, 7);

    // yanmega is a species, not a mega
    let yanmega = dex.get_species("yanmega");
    assert_eq!(yanmega.formeid, "");
    assert!(!yanmega.is_mega());
}

#[test]
fn test_unknown_forme_uses_longest_stem() {
    let dex = fixture_dex();
    let hoenn = dex.get_species("Pikachu-Hoenn");
    assert!(!hoenn.exists);
    assert_eq!(hoenn.base_species, "pikachu");
    assert_eq!(hoenn.forme, "hoenn");
    assert_eq!(hoenn.spriteid, "pikachu-hoenn");
}

#[test]
fn test_totem_sprite_id() {
    let dex = fixture_dex();
    let totem = dex.get_species("Gumshoos-Totem");
    assert_eq!(totem.formeid, "-totem");
    assert_eq!(totem.spriteid, "gumshoos");
    assert_eq!(totem.gen, 7);
    assert!(totem.is_totem());
}

#[test]
fn test_generation_from_num() {
    let dex = fixture_dex();
    assert_eq!(dex.get_species("bulbasaur").gen, 1);
    assert_eq!(dex.get_species("houndoom").gen, 2);
    assert_eq!(dex.get_species("rotom").gen, 4);
    assert_eq!(dex.get_species("kyurem-black").gen, 5);
    assert_eq!(dex.get_species("vivillon").gen, 6);
    assert_eq!(dex.get_species("syclant").gen, 0);
}

#[test]
fn test_alternate_form_leaves_base_untouched() {
    let dex = fixture_dex();
    let base = dex.get_species("Vivillon");
    let before = (*base).clone();

    let pokeball = dex.get_species("Vivillon-Pokeball");
    assert_eq!(pokeball.species, "Vivillon-Pokeball");
    assert_eq!(pokeball.speciesid, "vivillonpokeball");
    assert_eq!(pokeball.spriteid, "vivillon-pokeball");
    assert_eq!(pokeball.form.as_deref(), Some("Pokeball"));
    assert_eq!(pokeball.abilities, base.abilities);

    let after = dex.get_species("vivillon");
    assert!(Rc::ptr_eq(&base, &after));
    assert_eq!(*after, before, "base record must not change");
    assert!(Rc::ptr_eq(&pokeball, &dex.get_species("vivillonpokeball")));
}

// ============================================================================
// Abilities by generation
// ============================================================================

#[test]
fn test_hidden_ability_from_gen5() {
    let dex = fixture_dex();
    let gen4 = dex.abilities_for("pikachu", 4);
    assert!(!gen4.contains_key(&AbilitySlot::Hidden), "no hidden abilities before gen 5");
    let gen5 = dex.abilities_for("pikachu", 5);
    assert_eq!(gen5.get(&AbilitySlot::Hidden).map(String::as_str), Some("Lightning Rod"));
    assert!(dex.abilities_for("pikachu", 2).is_empty());
}

#[test]
fn test_generation_overrides() {
    let dex = fixture_dex();
    assert!(dex.has_ability("gengar", "Levitate", 6));
    assert!(!dex.has_ability("gengar", "Cursed Body", 6));
    assert!(dex.has_ability("gengar", "Cursed Body", 7));

    let gen3 = dex.abilities_for("houndoom", 3);
    assert!(!gen3.contains_key(&AbilitySlot::Secondary));
    let gen4 = dex.abilities_for("houndoom", 4);
    assert_eq!(gen4.get(&AbilitySlot::Secondary).map(String::as_str), Some("Flash Fire"));
}

// ============================================================================
// Moves
// ============================================================================

#[test]
fn test_hidden_power_variable_power() {
    let dex = fixture_dex();
    let hp = dex.get_move("hiddenpower60");
    let base = dex.get_move("hiddenpower");
    assert_eq!(hp.base_power, 60);
    assert_eq!(hp.id, base.id);
    assert_eq!(hp.name, base.name);
    assert_eq!(hp.move_type, base.move_type);
    assert_eq!(hp.category, base.category);
    assert!(hp.exists);

    let fire = dex.get_move("Hidden Power Fire 70");
    assert_eq!(fire.id, "hiddenpowerfire");
    assert_eq!(fire.move_type, "Fire");
    assert_eq!(fire.base_power, 70);

    assert_eq!(dex.get_move("return102").base_power, 102);
    assert_eq!(dex.get_move("frustration1").base_power, 1);
    // The base entries keep their own power
    assert_eq!(dex.get_move("return").base_power, 0);
}

#[test]
fn test_variable_power_without_base_entry() {
    let dex = fixture_dex();
    let water = dex.get_move("Hidden Power Water 60");
    assert!(!water.exists, "hiddenpowerwater has no table entry");
    assert_eq!(water.id, "hiddenpowerwater60");
    assert_eq!(water.name, "Hidden Power Water 60");
    assert_eq!(water.base_power, 60);
    assert_eq!(water.category, Category::Effect);
}

#[test]
fn test_move_backfill() {
    let dex = fixture_dex();
    let tbolt = dex.get_move("thunderbolt");
    assert_eq!(tbolt.base_type, "Electric");
    assert_eq!(tbolt.crit_ratio, 1);
    assert_eq!(tbolt.secondaries, vec![json!({"chance": 10, "status": "par"})]);
    assert_eq!(tbolt.flags, MoveFlags::PROTECT | MoveFlags::MIRROR);

    let punch = dex.get_move("thunderpunch");
    assert!(punch.flags.contains(MoveFlags::CONTACT | MoveFlags::PUNCH));
    assert!(dex.get_move("tackle").secondaries.is_empty());
}

#[test]
fn test_move_generation() {
    let dex = fixture_dex();
    assert_eq!(dex.get_move("tackle").gen, 1);
    assert_eq!(dex.get_move("hiddenpower").gen, 2);
    assert_eq!(dex.get_move("vcreate").gen, 5);
    assert_eq!(dex.get_move("moonblast").gen, 6);
}

#[test]
fn test_category_by_generation() {
    let dex = fixture_dex();
    assert_eq!(dex.category_for_gen("thunderpunch", 3, None), Category::Special);
    assert_eq!(dex.category_for_gen("thunderpunch", 6, None), Category::Physical);
    assert_eq!(dex.category_for_gen("thunderwave", 3, None), Category::Status);
    // Hidden Power's category follows its real type
    assert_eq!(dex.category_for_gen("hiddenpower", 3, Some("Fighting")), Category::Physical);
    assert_eq!(dex.category_for_gen("hiddenpower", 3, Some("Fire")), Category::Special);
}

// ============================================================================
// Items, abilities, types
// ============================================================================

#[test]
fn test_item_and_ability_generation() {
    let dex = fixture_dex();
    assert_eq!(dex.get_item("leftovers").gen, 2, "explicit gen wins");
    assert_eq!(dex.get_item("choicescarf").gen, 3);
    assert_eq!(dex.get_item("airballoon").gen, 5);
    assert_eq!(dex.get_item("weaknesspolicy").gen, 6);
    assert_eq!(dex.get_item("charizarditex").mega_evolves.as_deref(), Some("Charizard"));

    assert_eq!(dex.get_ability("static").gen, 3);
    assert_eq!(dex.get_ability("download").gen, 4);
    assert_eq!(dex.get_ability("toughclaws").gen, 6);
    assert_eq!(dex.get_ability("mountaineer").gen, 0);
}

#[test]
fn test_nonstandard_tags_and_flags_both_load() {
    let dex = fixture_dex();
    assert_eq!(dex.get_species("syclant").is_nonstandard.as_deref(), Some("CAP"));
    // abilities.json marks Mountaineer with a bare `true`
    let mountaineer = dex.get_ability("mountaineer");
    assert!(mountaineer.exists);
    assert!(mountaineer.is_nonstandard.is_some());
    assert_eq!(dex.get_ability("levitate").is_nonstandard, None);
}

#[test]
fn test_types() {
    let dex = fixture_dex();
    let water = dex.get_type("WATER");
    assert_eq!(water.id, "Water");
    assert_eq!(water.name, "Water");
    assert!(water.exists);
    assert_eq!(water.damage_taken["Electric"], 1);
    assert!(Rc::ptr_eq(&water, &dex.get_type("water")));
}

// ============================================================================
// Generic effects
// ============================================================================

#[test]
fn test_prefixed_effects_return_specific_records() {
    let dex = fixture_dex();
    match dex.get_effect("item:Leftovers") {
        AnyEffect::Item(item) => assert!(Rc::ptr_eq(&item, &dex.get_item("leftovers"))),
        other => panic!("expected an item, got {:?}", other.effect_type()),
    }
    assert!(matches!(dex.get_effect("ability:Flash Fire"), AnyEffect::Ability(_)));
    assert!(matches!(dex.get_effect("move:Thunderbolt"), AnyEffect::Move(_)));
}

#[test]
fn test_effect_lookup_order() {
    let dex = fixture_dex();

    let rain = dex.get_effect("Rain Dance");
    assert_eq!(rain.effect_type(), EffectType::Weather);
    match &rain {
        AnyEffect::Effect(effect) => assert_eq!(effect.data["duration"], 5),
        _ => panic!("weather should be a generic effect"),
    }
    assert_eq!(dex.get_effect("confusion").effect_type(), EffectType::Condition);

    for embedded in ["substitute", "flashfire", "airballoon"] {
        let effect = dex.get_effect(embedded);
        assert!(effect.exists(), "{embedded} has an embedded effect");
        assert_eq!(effect.id(), embedded);
        assert_eq!(effect.effect_type(), EffectType::Effect);
    }

    // Thunderbolt has no embedded effect
    assert!(!dex.get_effect("thunderbolt").exists());

    let recoil = dex.get_effect("recoil");
    assert!(recoil.exists());
    assert_eq!(recoil.effect_type(), EffectType::Recoil);
    assert_eq!(dex.get_effect("drain").effect_type(), EffectType::Drain);
}

// ============================================================================
// Sprite metadata lifecycle
// ============================================================================

#[test]
fn test_xy_less_species_uses_bw_animation() {
    let dex = fixture_dex();
    let sprite = dex.sprite_data("genesect", Facing::Front, &SpriteOptions::default());
    assert!(sprite.url.ends_with("sprites/bwani/genesect.gif"), "got {}", sprite.url);
    assert_eq!((sprite.w, sprite.h), (68.0, 70.0));
    assert!(!sprite.pixelated);
    assert_eq!(sprite.cry_url, "audio/cries/genesect.mp3");
}

#[test]
fn test_missing_bw_metadata_is_requested_once() {
    let mut data = fixture_data();
    data.sprites_bw.clear();
    let dex = Dex::new(data);

    let sprite = dex.sprite_data("genesect", Facing::Front, &SpriteOptions::default());
    assert!(sprite.url.ends_with("sprites/bw/genesect.png"), "got {}", sprite.url);
    assert_eq!(sprite.cry_url, "");
    assert!(
        !dex.request_sprite_metadata(SpriteSet::Bw),
        "the fallback should already have requested bw metadata"
    );
}

#[test]
fn test_installed_bw_metadata_is_used() {
    let mut data = fixture_data();
    let bw = std::mem::take(&mut data.sprites_bw);
    let mut dex = Dex::new(data);
    dex.install_sprite_metadata(SpriteSet::Bw, bw);

    let sprite = dex.sprite_data("genesect", Facing::Back, &SpriteOptions::default());
    assert!(sprite.url.ends_with("sprites/bwani-back/genesect.gif"), "got {}", sprite.url);
    assert_eq!((sprite.w, sprite.h), (72.0, 66.0));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_drives_urls() {
    let config = DexConfig::from_toml(
        r#"
        resource_prefix = "http://localhost:8000"
        audio = "ogg"
        "#,
    )
    .unwrap();
    let dex = fixture_dex().with_config(config);

    let sprite = dex.sprite_data("pikachu", Facing::Front, &SpriteOptions::default());
    assert_eq!(sprite.url, "http://localhost:8000/sprites/xyani/pikachu.gif");
    assert_eq!(sprite.cry_url, "audio/cries/pikachu.ogg");
    assert_eq!(
        dex.item_icon("leftovers").url,
        "http://localhost:8000/sprites/itemicons-sheet.png"
    );
}

#[test]
fn test_server_afd_overrides_everything() {
    let config = DexConfig {
        afd: true,
        ..DexConfig::default()
    };
    let dex = fixture_dex().with_config(config);
    let sprite = dex.sprite_data("charizard", Facing::Back, &SpriteOptions::default());
    assert!(sprite.url.ends_with("sprites/afd-back/charizard.png"), "got {}", sprite.url);
    assert_eq!(sprite.cry_url, "audio/cries/charizard.mp3");
}
