//! Tests for the `module+offset` parser

use addrsym_core::prelude::*;

fn context(name: &str, id: &str, base: u64) -> ModuleContext
{
    ModuleContext::new(ModuleDescriptor::new(name, id), Address::new(base))
}

fn parser() -> ModuleOffsetParser
{
    ModuleOffsetParser::new([
        context("libfoo.so", "AAAA", 0x1000),
        context("libstdc++.so.6", "BBBB", 0x7f00_0000),
    ])
}

#[test]
fn test_resolves_known_module()
{
    let frames = parser().parse_frames("libfoo.so+0x500");
    let frame = frames.frames()[0].frame.as_resolved().unwrap();
    assert_eq!(frame.raw, Address::new(0x1500));
    assert_eq!(frame.relative, Address::new(0x500));
    assert_eq!(frame.module.identifier(), "AAAA");
    assert_eq!(frames.frames()[0].depth, FrameDepth::OUTERMOST);
}

#[test]
fn test_module_name_with_plus()
{
    let frames = parser().parse_frames("libstdc++.so.6+0x10");
    let frame = frames.frames()[0].frame.as_resolved().unwrap();
    assert_eq!(frame.module.name(), "libstdc++.so.6");
    assert_eq!(frame.raw, Address::new(0x7f00_0010));
}

#[test]
fn test_unresolvable_tokens_become_placeholders()
{
    let input = "libbar.so+0x10 0x1500 libfoo.so+ libfoo.so+zz +0x10";
    let frames = parser().parse_frames(input);

    let placeholders: Vec<_> = frames.descriptors().filter_map(FrameDescriptor::as_placeholder).collect();
    assert_eq!(
        placeholders,
        vec!["libbar.so+0x10", "0x1500", "libfoo.so+", "libfoo.so+zz", "+0x10"]
    );
}

#[test]
fn test_first_registration_wins()
{
    let mut parser = ModuleOffsetParser::new([context("libfoo.so", "FIRST", 0x1000)]);
    assert!(!parser.register(context("libfoo.so", "SECOND", 0x2000)));
    assert!(parser.register(context("libbar.so", "THIRD", 0x3000)));
    assert_eq!(parser.module_count(), 2);

    let frames = parser.parse_frames("libfoo.so+0x1");
    assert_eq!(frames.required_modules()[0].identifier(), "FIRST");
}

#[test]
fn test_raw_address_wraps_past_top_of_address_space()
{
    let parser = ModuleOffsetParser::new([context("high", "X", u64::MAX)]);
    let frames = parser.parse_frames("high+0x2");
    assert_eq!(frames.frames()[0].frame.as_resolved().unwrap().raw, Address::new(1));
}

#[test]
fn test_parse_never_fails()
{
    let parser = ModuleOffsetParser::default();
    let frames = parser.parse("libfoo.so+0x1 junk").unwrap();
    assert_eq!(frames.placeholder_count(), 2);
}
