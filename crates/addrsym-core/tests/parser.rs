//! Tests for strategy selection through `ParserKind`

use addrsym_core::prelude::*;

#[test]
fn test_strategies_produce_the_same_frames()
{
    let fragment = ParserKind::from(FragmentParser::new("libfoo.so", "ABCD", 0x1000));
    let offsets = ParserKind::from(ModuleOffsetParser::new([ModuleContext::new(
        ModuleDescriptor::new("libfoo.so", "ABCD"),
        Address::new(0x1000),
    )]));

    let a = fragment.parse("0x1500 0x1a00").unwrap();
    let b = offsets.parse("libfoo.so+0x500 libfoo.so+0xa00").unwrap();
    assert_eq!(a, b);
    assert_eq!(fragment.name(), "fragment");
    assert_eq!(offsets.name(), "module-offset");
}
