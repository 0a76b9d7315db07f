use super::palette::{Palette, Role};

#[test]
fn plain_palette_leaves_text_alone() {
    let p = Palette::PLAIN;

    assert_eq!(p.paint(Role::Tag, "DW_TAG_member").to_string(), "DW_TAG_member");
    assert_eq!(
        p.paint(Role::Offset, format_args!("0x{:08x}", 0x2c)).to_string(),
        "0x0000002c"
    );
}

#[test]
fn each_role_has_its_own_escape() {
    let p = Palette::new(true);

    let painted: Vec<String> = [
        Role::Section,
        Role::Tag,
        Role::Str,
        Role::Offset,
        Role::Detail,
    ]
    .into_iter()
    .map(|role| p.paint(role, "x").to_string())
    .collect();

    assert_eq!(
        painted,
        [
            "\x1b[1;34mx\x1b[0m",
            "\x1b[34mx\x1b[0m",
            "\x1b[32mx\x1b[0m",
            "\x1b[33mx\x1b[0m",
            "\x1b[2mx\x1b[0m",
        ]
    );
}

#[test]
fn default_is_plain() {
    assert_eq!(Palette::default(), Palette::PLAIN);
    assert_ne!(Palette::new(true), Palette::PLAIN);
}
