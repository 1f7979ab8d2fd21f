use overtoast_core::layout::overlay_geometry;
use overtoast_core::platform::{DisplayProvider, Platform};

fn main() {
    let platform = Platform::new().expect("Error initializing platform");
    let displays = platform.list_displays().expect("Error listing displays");

    for display in &displays {
        println!("Display: {:?}", display.name);
        println!(
            "\tID: {:?}\n\
            \tBounds: {:?}\n\
            \tWork Area: {:?}\n\
            \tSlot 0: {:?}\n",
            display.id,
            display.bounds,
            display.work_area,
            overlay_geometry(&display.work_area, 0),
        );
    }
}
