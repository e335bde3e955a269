//! The demo store's fixed stock, rebuilt on every run.

use boutique_core::DomainResult;

use crate::catalog::Catalog;
use crate::item::{Category, Item};
use crate::section::Section;

type Row = (&'static str, u64, u32, &'static str);

const TOPS_MEN: [Row; 3] = [
    ("Polo Ejecutivo", 89_000, 8, "M"),
    ("Remera Sport", 59_000, 12, "L"),
    ("Camiseta Gym", 49_000, 15, "XL"),
];

const TOPS_WOMEN: [Row; 3] = [
    ("Top Elegante", 79_000, 10, "S"),
    ("Remera Fashion", 65_000, 15, "M"),
    ("Musculosa Sport", 45_000, 20, "L"),
];

const BOTTOMS_MEN: [Row; 3] = [
    ("Jeans Classic", 99_000, 10, "32"),
    ("Pantalón Formal", 125_000, 6, "34"),
    ("Bermuda Sport", 69_000, 14, "36"),
];

const BOTTOMS_WOMEN: [Row; 3] = [
    ("Jeans Fashion", 89_000, 12, "28"),
    ("Falda Ejecutiva", 115_000, 8, "30"),
    ("Calza Deportiva", 59_000, 18, "32"),
];

const FOOTWEAR_MEN: [Row; 3] = [
    ("Mocasines Cuero", 155_000, 8, "42"),
    ("Tenis Deportivos", 185_000, 12, "43"),
    ("Ojotas Verano", 39_000, 18, "41"),
];

const FOOTWEAR_WOMEN: [Row; 3] = [
    ("Stilettos", 165_000, 6, "37"),
    ("Sneakers", 175_000, 10, "38"),
    ("Sandalias Verano", 49_000, 15, "36"),
];

/// Tops, bottoms and footwear; men's items first within each section.
pub fn sample_catalog() -> DomainResult<Catalog> {
    let mut catalog = Catalog::new();
    catalog.add_section(section("TOPS", &TOPS_MEN, &TOPS_WOMEN)?);
    catalog.add_section(section("BOTTOMS", &BOTTOMS_MEN, &BOTTOMS_WOMEN)?);
    catalog.add_section(section("FOOTWEAR", &FOOTWEAR_MEN, &FOOTWEAR_WOMEN)?);
    Ok(catalog)
}

fn section(title: &str, men: &[Row], women: &[Row]) -> DomainResult<Section> {
    let mut section = Section::new(title);
    let rows = men
        .iter()
        .map(|row| (row, Category::Men))
        .chain(women.iter().map(|row| (row, Category::Women)));
    for (&(description, price, stock, size), category) in rows {
        section.add_item(Item::new(description, price, stock, size, category)?);
    }
    Ok(section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SaleOutcome;

    #[test]
    fn sample_has_three_sections_of_six() {
        let catalog = sample_catalog().unwrap();
        let titles: Vec<&str> = catalog.sections().iter().map(Section::title).collect();
        assert_eq!(titles, ["TOPS", "BOTTOMS", "FOOTWEAR"]);
        assert!(catalog.sections().iter().all(|s| s.len() == 6));
    }

    #[test]
    fn men_items_precede_women_items() {
        let catalog = sample_catalog().unwrap();
        for section in catalog.sections() {
            let categories: Vec<Category> = section.items().iter().map(Item::category).collect();
            assert_eq!(&categories[..3], &[Category::Men; 3]);
            assert_eq!(&categories[3..], &[Category::Women; 3]);
        }
    }

    #[test]
    fn sample_sells_with_spanish_labels() {
        let mut catalog = sample_catalog().unwrap();
        let before = catalog.total_units();

        assert!(catalog.sell("pantalón formal", "Varones").is_sold());
        assert!(catalog.sell("STILETTOS", "damas").is_sold());
        assert_eq!(catalog.sell("Stilettos", "Varones"), SaleOutcome::NotFound);
        assert_eq!(catalog.total_units(), before - 2);
    }
}
