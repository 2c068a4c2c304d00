use console::Style;
use orthoview_core::pipeline::LoadedVolume;
use orthoview_core::volume::Stack;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

fn vec3(v: impl Into<[f32; 3]>) -> String {
    let [x, y, z] = v.into();
    format!("({x:.3}, {y:.3}, {z:.3})")
}

pub fn print_volume_summary(source: &str, loaded: &LoadedVolume) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Volume"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();
    println!("  {:<14}{}", s.label.apply_to("Source"), s.path.apply_to(source));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Series"),
        s.value.apply_to(loaded.series().len())
    );
    for series in loaded.series() {
        println!(
            "    {:<12}{} stack(s)",
            s.label.apply_to(&series.uid),
            s.value.apply_to(series.stacks.len())
        );
    }
    println!();

    print_stack_section(&s, loaded.stack());
}

fn print_stack_section(s: &Styles, stack: &Stack) {
    let dims = stack.dimensions_ijk();
    let bbox = stack.world_bounding_box();

    println!("  {}", s.header.apply_to("Display stack"));
    println!(
        "    {:<14}{}",
        s.label.apply_to("Dimensions"),
        s.value.apply_to(format!("{} x {} x {}", dims.x, dims.y, dims.z))
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Spacing"),
        s.value.apply_to(vec3(stack.geometry.spacing))
    );
    println!("    {:<14}{}", s.label.apply_to("X cosine"), vec3(stack.x_cosine()));
    println!("    {:<14}{}", s.label.apply_to("Y cosine"), vec3(stack.y_cosine()));
    println!("    {:<14}{}", s.label.apply_to("Z cosine"), vec3(stack.z_cosine()));
    println!("    {:<14}{}", s.label.apply_to("Origin"), vec3(stack.geometry.origin));
    println!(
        "    {:<14}x [{:.1}, {:.1}]  y [{:.1}, {:.1}]  z [{:.1}, {:.1}]",
        s.label.apply_to("World bbox"),
        bbox[0],
        bbox[1],
        bbox[2],
        bbox[3],
        bbox[4],
        bbox[5]
    );
    println!("    {:<14}{}", s.label.apply_to("World centre"), vec3(stack.world_center()));
    println!(
        "    {:<14}{}",
        s.label.apply_to("Intensity"),
        s.value.apply_to(format!("{:.2} .. {:.2}", stack.min, stack.max))
    );
    println!();
}
