use leptos::prelude::*;
use leptos_ui::variants;

variants! {
    Badge {
        base: "inline-flex items-center justify-center gap-1 rounded-md border px-2 py-0.5 text-xs font-medium w-fit whitespace-nowrap shrink-0 [&>svg]:size-3 [&>svg]:pointer-events-none",
        variants: {
            variant: {
                Default: "border-transparent bg-primary text-primary-foreground",
                Secondary: "border-transparent bg-secondary text-secondary-foreground",
                Destructive: "border-transparent bg-destructive text-white",
                Outline: "text-foreground"
            },
            size: {
                Default: ""
            }
        },
        component: {
            element: span
        }
    }
}
