use dioxus::prelude::*;

/// Icon size prop
#[derive(Props, Clone, PartialEq)]
pub struct IconProps {
    #[props(default = "w-4 h-4".to_string())]
    pub class: String,
    #[props(default = false)]
    pub filled: bool,
}

/// 24x24 stroke canvas shared by every icon below (lucide geometry)
#[component]
fn LucideSvg(class: String, #[props(default = false)] filled: bool, children: Element) -> Element {
    let fill_value = if filled { "currentColor" } else { "none" };
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "{fill_value}",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {children}
        }
    }
}

#[component]
pub fn SparklesIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class, filled: props.filled,
            path { d: "m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z" }
            path { d: "M5 3v4" }
            path { d: "M19 17v4" }
            path { d: "M3 5h4" }
            path { d: "M17 19h4" }
        }
    }
}

#[component]
pub fn SearchIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        }
    }
}

#[component]
pub fn HeartIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class, filled: props.filled,
            path { d: "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" }
        }
    }
}

#[component]
pub fn StarIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class, filled: props.filled,
            polygon { points: "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" }
        }
    }
}

#[component]
pub fn MenuIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            line { x1: "4", x2: "20", y1: "12", y2: "12" }
            line { x1: "4", x2: "20", y1: "6", y2: "6" }
            line { x1: "4", x2: "20", y1: "18", y2: "18" }
        }
    }
}

#[component]
pub fn XIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}

#[component]
pub fn UserIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            path { d: "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" }
            circle { cx: "12", cy: "7", r: "4" }
        }
    }
}

#[component]
pub fn BookOpenIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            path { d: "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z" }
            path { d: "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z" }
        }
    }
}

#[component]
pub fn ArrowRightIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            path { d: "M5 12h14" }
            path { d: "m12 5 7 7-7 7" }
        }
    }
}

#[component]
pub fn DownloadIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }
            polyline { points: "7 10 12 15 17 10" }
            line { x1: "12", x2: "12", y1: "15", y2: "3" }
        }
    }
}

#[component]
pub fn HeadphonesIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            path { d: "M3 14h3a2 2 0 0 1 2 2v3a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a9 9 0 0 1 18 0v7a2 2 0 0 1-2 2h-1a2 2 0 0 1-2-2v-3a2 2 0 0 1 2-2h3" }
        }
    }
}

#[component]
pub fn RefreshIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            path { d: "M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8" }
            path { d: "M21 3v5h-5" }
            path { d: "M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16" }
            path { d: "M8 16H3v5" }
        }
    }
}

#[component]
pub fn ShieldIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            path { d: "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z" }
        }
    }
}

#[component]
pub fn PlayIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class, filled: props.filled,
            polygon { points: "6 3 20 12 6 21 6 3" }
        }
    }
}

#[component]
pub fn GridIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            rect { width: "7", height: "7", x: "3", y: "3", rx: "1" }
            rect { width: "7", height: "7", x: "14", y: "3", rx: "1" }
            rect { width: "7", height: "7", x: "14", y: "14", rx: "1" }
            rect { width: "7", height: "7", x: "3", y: "14", rx: "1" }
        }
    }
}

#[component]
pub fn ListIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            line { x1: "8", x2: "21", y1: "6", y2: "6" }
            line { x1: "8", x2: "21", y1: "12", y2: "12" }
            line { x1: "8", x2: "21", y1: "18", y2: "18" }
            line { x1: "3", x2: "3.01", y1: "6", y2: "6" }
            line { x1: "3", x2: "3.01", y1: "12", y2: "12" }
            line { x1: "3", x2: "3.01", y1: "18", y2: "18" }
        }
    }
}

#[component]
pub fn ShoppingCartIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            circle { cx: "8", cy: "21", r: "1" }
            circle { cx: "19", cy: "21", r: "1" }
            path { d: "M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12" }
        }
    }
}

#[component]
pub fn TrashIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            path { d: "M3 6h18" }
            path { d: "M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6" }
            path { d: "M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2" }
            line { x1: "10", x2: "10", y1: "11", y2: "17" }
            line { x1: "14", x2: "14", y1: "11", y2: "17" }
        }
    }
}

#[component]
pub fn MailIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            rect { width: "20", height: "16", x: "2", y: "4", rx: "2" }
            path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
        }
    }
}

#[component]
pub fn InstagramIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            rect { width: "20", height: "20", x: "2", y: "2", rx: "5", ry: "5" }
            path { d: "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" }
            line { x1: "17.5", x2: "17.51", y1: "6.5", y2: "6.5" }
        }
    }
}

#[component]
pub fn TwitterIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            path { d: "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z" }
        }
    }
}

#[component]
pub fn FacebookIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            path { d: "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z" }
        }
    }
}

#[component]
pub fn CheckIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            polyline { points: "20 6 9 17 4 12" }
        }
    }
}

#[component]
pub fn CrownIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            path { d: "m2 4 3 12h14l3-12-6 7-4-7-4 7-6-7zm3 16h14" }
        }
    }
}

#[component]
pub fn ZapIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            polygon { points: "13 2 3 14 12 14 11 22 21 10 12 10 13 2" }
        }
    }
}

#[component]
pub fn CreditCardIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            rect { width: "20", height: "14", x: "2", y: "5", rx: "2" }
            line { x1: "2", x2: "22", y1: "10", y2: "10" }
        }
    }
}

#[component]
pub fn LockIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            rect { width: "18", height: "11", x: "3", y: "11", rx: "2", ry: "2" }
            path { d: "M7 11V7a5 5 0 0 1 10 0v4" }
        }
    }
}

#[component]
pub fn ClockIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            circle { cx: "12", cy: "12", r: "10" }
            polyline { points: "12 6 12 12 16 14" }
        }
    }
}

#[component]
pub fn ShoppingBagIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            path { d: "M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z" }
            path { d: "M3 6h18" }
            path { d: "M16 10a4 4 0 0 1-8 0" }
        }
    }
}

#[component]
pub fn SettingsIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            path { d: "M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z" }
            circle { cx: "12", cy: "12", r: "3" }
        }
    }
}

#[component]
pub fn GiftIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            rect { x: "3", y: "8", width: "18", height: "4", rx: "1" }
            path { d: "M12 8v13" }
            path { d: "M19 12v7a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2v-7" }
            path { d: "M7.5 8a2.5 2.5 0 0 1 0-5A4.8 8 0 0 1 12 8a4.8 8 0 0 1 4.5-5 2.5 2.5 0 0 1 0 5" }
        }
    }
}

#[component]
pub fn LogOutIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            path { d: "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4" }
            polyline { points: "16 17 21 12 16 7" }
            line { x1: "21", x2: "9", y1: "12", y2: "12" }
        }
    }
}

#[component]
pub fn EditIcon(props: IconProps) -> Element {
    rsx! {
        LucideSvg { class: props.class,
            path { d: "M12 20h9" }
            path { d: "M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4Z" }
        }
    }
}
