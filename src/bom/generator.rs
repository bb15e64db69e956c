//! Bill-of-materials generation from layout results.

use std::collections::BTreeSet;

use tracing::debug;

use crate::config::rounding::round2;
use crate::config::{
    BRUSH_5X5_SHARE, BRUSH_5X7_SHARE, EXIT_QTY, MM2_PER_M2, MM_PER_M, PANELS_PER_PARKING,
    PIVOT_KIT_QTY,
};
use crate::model::{BomItem, CalculationResult, Category, Material, MaterialVariant, ProjectInputs};

/// Catalog base names of the generated parts.
pub mod parts {
    pub const PERFIL_U_REGULAGEM: &str = "Perfil U de regulagem (A)";
    pub const TRILHO_SUPERIOR: &str = "Trilho superior (D)";
    pub const TRILHO_INFERIOR: &str = "Trilho inferior (C)";
    pub const LEITO_VIDRO: &str = "Leito do vidro (E)";
    pub const ESCOVA_5X7: &str = "Escova 5x7";
    pub const ESCOVA_5X5: &str = "Escova 5x5";
    pub const KIT_ROLDANA: &str = "Kit roldana painel";
    pub const TAMPAS_LEITO: &str = "Tampas de leito";
    pub const ESTACIONAMENTO: &str = "Estacionamento";
    pub const KIT_PIVO: &str = "Kit pivô";
    pub const CONJUNTO_SAIDA: &str = "Conjunto saída sup/inf";
    pub const APARADOR: &str = "Aparador";
    pub const VIDRO_TEMPERADO: &str = "Vidro temperado";
}

/// Units used on BOM lines.
pub mod units {
    pub const METER: &str = "m";
    pub const SQUARE_METER: &str = "m²";
    pub const KIT: &str = "kit";
    pub const PIECE: &str = "piece";
    pub const SET: &str = "conjunto";
}

/// BOM lines plus the parts that had no catalog variant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BomGeneration {
    pub items: Vec<BomItem>,
    /// Base names (or profile display names) with no matching variant.
    pub unmatched_parts: Vec<String>,
}

/// Generate the bill of materials for a project.
///
/// Parts without a matching catalog variant are left out.
pub fn generate_bom(
    inputs: &ProjectInputs,
    results: &[CalculationResult],
    materials: &[Material],
    variants: &[MaterialVariant],
) -> Vec<BomItem> {
    generate_bom_with_diagnostics(inputs, results, materials, variants).items
}

/// Same as [`generate_bom`], also reporting unmatched parts.
pub fn generate_bom_with_diagnostics(
    inputs: &ProjectInputs,
    results: &[CalculationResult],
    materials: &[Material],
    variants: &[MaterialVariant],
) -> BomGeneration {
    let mut bom = BomBuilder::new(VariantResolver::new(&inputs.finish, materials, variants));
    let params = &inputs.params;

    let total_panels = results
        .iter()
        .fold(0u32, |acc, r| acc.saturating_add(r.panel_count));
    let total_length = inputs.dimensions.total_front_length(inputs.geometry);
    let total_height = inputs.dimensions.h;
    let panels = f64::from(total_panels);

    // Profiles
    if total_height > 0.0 {
        bom.profile(
            "perfil-u-regulagem",
            parts::PERFIL_U_REGULAGEM,
            parts::PERFIL_U_REGULAGEM,
            round2(total_height * 2.0 / MM_PER_M),
        );
    }

    if total_length > 0.0 {
        let meters = round2(total_length / MM_PER_M);
        bom.profile(
            "trilho-superior",
            parts::TRILHO_SUPERIOR,
            parts::TRILHO_SUPERIOR,
            meters,
        );
        bom.profile(
            "trilho-inferior",
            parts::TRILHO_INFERIOR,
            parts::TRILHO_INFERIOR,
            meters,
        );
    }

    for result in results {
        bom.profile(
            &format!("leito-vidro-{}", result.front_slug()),
            &format!("{} - {}", parts::LEITO_VIDRO, result.front_name),
            parts::LEITO_VIDRO,
            round2(result.lrp / MM_PER_M * f64::from(result.panel_count)),
        );
    }

    // Brushes run along every panel edge plus the tracks.
    let brush_length = (total_height * panels + total_length) / MM_PER_M;
    if brush_length > 0.0 {
        bom.part(
            "escova-5x7",
            parts::ESCOVA_5X7,
            parts::ESCOVA_5X7,
            Category::Brush,
            round2(brush_length * BRUSH_5X7_SHARE),
            units::METER,
        );
        bom.part(
            "escova-5x5",
            parts::ESCOVA_5X5,
            parts::ESCOVA_5X5,
            Category::Brush,
            round2(brush_length * BRUSH_5X5_SHARE),
            units::METER,
        );
    }

    // Accessories
    if total_panels > 0 {
        bom.part(
            "kit-roldana-painel",
            parts::KIT_ROLDANA,
            parts::KIT_ROLDANA,
            Category::Accessory,
            f64::from(total_panels.saturating_sub(PIVOT_KIT_QTY)),
            units::KIT,
        );
        bom.part(
            "tampas-leito",
            parts::TAMPAS_LEITO,
            parts::TAMPAS_LEITO,
            Category::Accessory,
            f64::from(total_panels.saturating_mul(2)),
            units::PIECE,
        );
        bom.part(
            "estacionamento",
            parts::ESTACIONAMENTO,
            parts::ESTACIONAMENTO,
            Category::Accessory,
            f64::from(total_panels.div_ceil(PANELS_PER_PARKING) * 2),
            units::PIECE,
        );
    }

    bom.part(
        "kit-pivo",
        parts::KIT_PIVO,
        parts::KIT_PIVO,
        Category::Accessory,
        f64::from(PIVOT_KIT_QTY),
        units::KIT,
    );

    if inputs.openings > 0 {
        let lock = params.lock_type;
        bom.part(
            &format!("fechadura-{}", lock.key_slug()),
            &format!("{} {}mm", lock.material_name(), params.glass_thickness),
            lock.material_name(),
            Category::Accessory,
            f64::from(inputs.openings),
            units::PIECE,
        );
    }

    bom.part(
        "conjunto-saida",
        parts::CONJUNTO_SAIDA,
        parts::CONJUNTO_SAIDA,
        Category::Accessory,
        f64::from(EXIT_QTY),
        units::SET,
    );

    bom.part(
        "aparador",
        &format!("{} {}mm", parts::APARADOR, params.aparador_size.mm()),
        parts::APARADOR,
        Category::Accessory,
        f64::from(EXIT_QTY),
        units::PIECE,
    );

    // Glass
    for result in results {
        let area = result.lrp * result.hrp * f64::from(result.panel_count) / MM2_PER_M2;
        bom.part(
            &format!(
                "vidro-temperado-{}mm-{}",
                params.glass_thickness,
                result.front_slug()
            ),
            &format!(
                "{} {}mm - {}",
                parts::VIDRO_TEMPERADO,
                params.glass_thickness,
                result.front_name
            ),
            parts::VIDRO_TEMPERADO,
            Category::Glass,
            round2(area),
            units::SQUARE_METER,
        );
    }

    bom.finish()
}

/// Resolves part base names to catalog variant ids.
struct VariantResolver<'a> {
    finish: &'a str,
    materials: &'a [Material],
    variants: &'a [MaterialVariant],
    unmatched: BTreeSet<String>,
}

impl<'a> VariantResolver<'a> {
    fn new(finish: &'a str, materials: &'a [Material], variants: &'a [MaterialVariant]) -> Self {
        Self {
            finish,
            materials,
            variants,
            unmatched: BTreeSet::new(),
        }
    }

    /// Profile variant by exact display name "<base> - <finish>".
    fn profile(&mut self, base_name: &str) -> Option<String> {
        let display_name = format!("{} - {}", base_name, self.finish);
        let found = self
            .variants
            .iter()
            .find(|v| v.display_name == display_name)
            .map(|v| v.id.clone());
        if found.is_none() {
            self.miss(display_name);
        }
        found
    }

    /// Finish-less variant of the material named `base_name`.
    fn plain(&mut self, base_name: &str) -> Option<String> {
        let found = self
            .materials
            .iter()
            .find(|m| m.name == base_name)
            .and_then(|material| {
                self.variants
                    .iter()
                    .find(|v| v.material_id == material.id && v.finish_id.is_none())
            })
            .map(|v| v.id.clone());
        if found.is_none() {
            self.miss(base_name.to_string());
        }
        found
    }

    fn miss(&mut self, name: String) {
        if self.unmatched.insert(name.clone()) {
            debug!("No catalog variant for '{}', line omitted", name);
        }
    }
}

/// Accumulates BOM lines, dropping unresolved and non-positive ones.
struct BomBuilder<'a> {
    resolver: VariantResolver<'a>,
    items: Vec<BomItem>,
}

impl<'a> BomBuilder<'a> {
    fn new(resolver: VariantResolver<'a>) -> Self {
        Self {
            resolver,
            items: Vec::new(),
        }
    }

    /// Add a profile line measured in meters.
    fn profile(&mut self, key: &str, name: &str, base_name: &str, quantity: f64) {
        if let Some(variant_id) = self.resolver.profile(base_name) {
            self.items.push(BomItem::new(
                key,
                name,
                Category::Profile,
                quantity,
                units::METER,
                variant_id,
            ));
        }
    }

    /// Add a non-profile line.
    fn part(
        &mut self,
        key: &str,
        name: &str,
        base_name: &str,
        category: Category,
        quantity: f64,
        unit: &str,
    ) {
        if let Some(variant_id) = self.resolver.plain(base_name) {
            self.items
                .push(BomItem::new(key, name, category, quantity, unit, variant_id));
        }
    }

    fn finish(self) -> BomGeneration {
        BomGeneration {
            items: self
                .items
                .into_iter()
                .filter(|item| item.quantity > 0.0)
                .collect(),
            unmatched_parts: self.resolver.unmatched.into_iter().collect(),
        }
    }
}
