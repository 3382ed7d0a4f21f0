pub mod controls;
pub mod kpi_card;
pub mod material_row;
pub mod meseta_icon;
pub mod summary_card;
