/// UI layer: sidebar/top-bar widgets, page layouts, and chart rendering.
pub mod charts;
pub mod pages;
pub mod panels;
