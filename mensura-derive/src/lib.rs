//! Derive macro implementation used by `mensura-core`.
//!
//! `mensura-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of
//! `crate::Unit`, `crate::Conversion`, `crate::Registry`, `crate::System` and `crate::Error`, so it is intended to be
//! used by `mensura-core` (or by crates that expose an identical crate-root API).
//!
//! Most users should depend on `mensura` instead and use the predefined unit families.
//!
//! # Generated impls
//!
//! For a unit family enum `MyUnit`, the derive implements:
//!
//! - `crate::Unit for MyUnit`, including a lazily built per-family registry
//! - `core::fmt::Display for MyUnit` (formats as the abbreviation)
//! - `core::str::FromStr for MyUnit` (looks the string up among all spellings)
//!
//! # Attributes
//!
//! The enum itself carries a `#[unit(...)]` attribute:
//!
//! - `family = "length"`: human-readable family name
//! - `dimension = Dimension::LENGTH`: constant expression for the family dimension
//! - `standard = Metre`: the variant every value is normalized to
//!
//! Every variant carries its own `#[unit(...)]` attribute:
//!
//! - `symbol = "m"`: abbreviation used for display
//! - `ratio = 1000.0`: factor from this unit to the standard unit
//! - `offset = 273.15` (optional): additive term, for affine families only
//! - `aliases = ["metre", "meter"]` (optional): extra accepted spellings
//! - `systems = [MetreKilogramSecondKelvin]` (optional): systems whose consistent unit this is

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    bracketed,
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
    Attribute, Data, DeriveInput, Expr, ExprLit, Fields, Ident, Lit, LitStr, Token,
};

/// Derive `crate::Unit`, `Display` and `FromStr` for a unit family enum.
///
/// The enum must carry `#[unit(family = ..., dimension = ..., standard = ...)]` and every variant must carry
/// `#[unit(symbol = ..., ratio = ...)]`.
///
/// This macro is intended for use by `mensura-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "unit families cannot be generic",
        ));
    }

    let family_attr = parse_family_attribute(&input.attrs)?;

    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "`Unit` can only be derived for enums",
            ))
        }
    };

    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            name,
            "a unit family must declare at least one unit",
        ));
    }

    let mut units = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "unit variants cannot carry fields",
            ));
        }
        let attr = parse_unit_attribute(&variant.attrs, &variant.ident)?;
        units.push((variant.ident.clone(), attr));
    }

    let standard = &family_attr.standard;
    let (_, standard_attr) = units
        .iter()
        .find(|(ident, _)| ident == standard)
        .ok_or_else(|| {
            syn::Error::new_spanned(
                standard,
                format!("standard unit `{}` is not a variant of `{}`", standard, name),
            )
        })?;
    check_identity(standard, standard_attr)?;

    let mut claimed: Vec<(&Ident, &Ident)> = Vec::new();
    for (variant, attr) in &units {
        for system in &attr.systems {
            if let Some((_, owner)) = claimed.iter().find(|(s, _)| *s == system) {
                return Err(syn::Error::new_spanned(
                    system,
                    format!("system `{}` is already mapped to `{}`", system, owner),
                ));
            }
            claimed.push((system, variant));
        }
    }

    let family = &family_attr.family;
    let dimension = &family_attr.dimension;

    let variants: Vec<&Ident> = units.iter().map(|(ident, _)| ident).collect();
    let indices: Vec<usize> = (0..units.len()).collect();
    let symbols: Vec<&LitStr> = units.iter().map(|(_, attr)| &attr.symbol).collect();
    let aliases: Vec<TokenStream2> = units
        .iter()
        .map(|(_, attr)| {
            let list = &attr.aliases;
            quote! { &[#(#list),*] }
        })
        .collect();
    let conversions: Vec<TokenStream2> = units
        .iter()
        .map(|(_, attr)| {
            let ratio = &attr.ratio;
            match &attr.offset {
                Some(offset) => quote! { crate::Conversion::affine(#ratio, #offset) },
                None => quote! { crate::Conversion::scale(#ratio) },
            }
        })
        .collect();
    let system_arms = claimed.iter().map(|(system, variant)| {
        quote! {
            crate::System::#system => ::core::option::Option::Some(#name::#variant),
        }
    });

    let expanded = quote! {
        impl crate::Unit for #name {
            const FAMILY: &'static str = #family;
            const DIMENSION: crate::Dimension = #dimension;
            const STANDARD: Self = #name::#standard;
            const ALL: &'static [Self] = &[#(#name::#variants),*];

            #[inline]
            fn index(self) -> usize {
                match self {
                    #(#name::#variants => #indices,)*
                }
            }

            #[inline]
            fn abbreviation(self) -> &'static str {
                match self {
                    #(#name::#variants => #symbols,)*
                }
            }

            fn aliases(self) -> &'static [&'static str] {
                match self {
                    #(#name::#variants => #aliases,)*
                }
            }

            fn to_standard(self) -> crate::Conversion {
                match self {
                    #(#name::#variants => #conversions,)*
                }
            }

            #[allow(unreachable_patterns)]
            fn consistent_unit(system: crate::System) -> ::core::option::Option<Self> {
                match system {
                    #(#system_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn registry() -> &'static crate::Registry<Self> {
                static REGISTRY: ::once_cell::sync::OnceCell<crate::Registry<#name>> =
                    ::once_cell::sync::OnceCell::new();
                REGISTRY.get_or_init(crate::Registry::<#name>::build)
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.pad(<#name as crate::Unit>::abbreviation(*self))
            }
        }

        impl ::core::str::FromStr for #name {
            type Err = crate::Error;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <#name as crate::Unit>::parse(s)
            }
        }
    };

    Ok(expanded)
}

/// The standard unit must convert to itself exactly.
fn check_identity(standard: &Ident, attr: &UnitAttribute) -> syn::Result<()> {
    if let Some(offset) = &attr.offset {
        return Err(syn::Error::new_spanned(
            offset,
            format!("standard unit `{}` cannot have an offset", standard),
        ));
    }
    let is_one = match &attr.ratio {
        Expr::Lit(ExprLit {
            lit: Lit::Float(f), ..
        }) => f.base10_parse::<f64>().map(|v| v == 1.0).unwrap_or(false),
        Expr::Lit(ExprLit {
            lit: Lit::Int(i), ..
        }) => i.base10_parse::<u64>().map(|v| v == 1).unwrap_or(false),
        _ => false,
    };
    if is_one {
        Ok(())
    } else {
        Err(syn::Error::new_spanned(
            &attr.ratio,
            format!("standard unit `{}` must have `ratio = 1.0`", standard),
        ))
    }
}

/// Parsed contents of the enum-level `#[unit(...)]` attribute.
struct FamilyAttribute {
    family: LitStr,
    dimension: Expr,
    standard: Ident,
}

impl Parse for FamilyAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut family: Option<LitStr> = None;
        let mut dimension: Option<Expr> = None;
        let mut standard: Option<Ident> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "family" => {
                    family = Some(input.parse()?);
                }
                "dimension" => {
                    dimension = Some(input.parse()?);
                }
                "standard" => {
                    standard = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let family = family
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `family`"))?;
        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;
        let standard = standard.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `standard`")
        })?;

        Ok(FamilyAttribute {
            family,
            dimension,
            standard,
        })
    }
}

/// Parsed contents of a variant-level `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    ratio: Expr,
    offset: Option<Expr>,
    aliases: Vec<LitStr>,
    systems: Vec<Ident>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut ratio: Option<Expr> = None;
        let mut offset: Option<Expr> = None;
        let mut aliases: Vec<LitStr> = Vec::new();
        let mut systems: Vec<Ident> = Vec::new();

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "ratio" => {
                    ratio = Some(input.parse()?);
                }
                "offset" => {
                    offset = Some(input.parse()?);
                }
                "aliases" => {
                    let content;
                    bracketed!(content in input);
                    let list = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?;
                    aliases.extend(list);
                }
                "systems" => {
                    let content;
                    bracketed!(content in input);
                    let list = Punctuated::<Ident, Token![,]>::parse_terminated(&content)?;
                    systems.extend(list);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let ratio = ratio
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `ratio`"))?;

        Ok(UnitAttribute {
            symbol,
            ratio,
            offset,
            aliases,
            systems,
        })
    }
}

fn parse_family_attribute(attrs: &[Attribute]) -> syn::Result<FamilyAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<FamilyAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute on the unit family",
    ))
}

fn parse_unit_attribute(attrs: &[Attribute], variant: &Ident) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new_spanned(
        variant,
        format!("missing #[unit(...)] attribute on `{}`", variant),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    fn length_family() -> DeriveInput {
        parse_quote! {
            #[unit(family = "length", dimension = Dimension::LENGTH, standard = Metre)]
            pub enum LengthUnit {
                #[unit(symbol = "km", ratio = 1000.0, aliases = ["kilometre", "kilometer"])]
                Kilometre,
                #[unit(symbol = "m", ratio = 1.0, systems = [MetreKilogramSecondKelvin])]
                Metre,
                #[unit(symbol = "mm", ratio = 0.001, systems = [MillimetreGramSecondKelvin])]
                Millimetre,
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Attribute parsing
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_parse_family_attribute_complete() {
        let input = length_family();
        let attr = parse_family_attribute(&input.attrs).unwrap();
        assert_eq!(attr.family.value(), "length");
        assert_eq!(attr.standard.to_string(), "Metre");
    }

    #[test]
    fn test_parse_family_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub enum LengthUnit { Metre }
        };

        let err = parse_family_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing #[unit(...)] attribute"));
    }

    #[test]
    fn test_parse_family_attribute_missing_standard() {
        let tokens = quote! { family = "length", dimension = Dimension::LENGTH };
        let err = syn::parse2::<FamilyAttribute>(tokens).err().unwrap();
        assert!(err
            .to_string()
            .contains("missing required attribute `standard`"));
    }

    #[test]
    fn test_parse_family_attribute_missing_dimension() {
        let tokens = quote! { family = "length", standard = Metre };
        let err = syn::parse2::<FamilyAttribute>(tokens).err().unwrap();
        assert!(err
            .to_string()
            .contains("missing required attribute `dimension`"));
    }

    #[test]
    fn test_parse_unit_attribute_minimal() {
        let tokens = quote! { symbol = "m", ratio = 1.0 };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "m");
        assert!(attr.offset.is_none());
        assert!(attr.aliases.is_empty());
        assert!(attr.systems.is_empty());
    }

    #[test]
    fn test_parse_unit_attribute_full() {
        let tokens = quote! {
            symbol = "°C",
            ratio = 1.0,
            offset = constants::CELSIUS_OFFSET,
            aliases = ["C", "degC",],
            systems = [MetreKilogramSecondKelvin, MillimetreGramSecondKelvin],
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "°C");
        assert!(attr.offset.is_some());
        let aliases: Vec<String> = attr.aliases.iter().map(LitStr::value).collect();
        assert_eq!(aliases, vec!["C", "degC"]);
        assert_eq!(attr.systems.len(), 2);
    }

    #[test]
    fn test_parse_unit_attribute_missing_symbol() {
        let tokens = quote! { ratio = 1.0 };
        let err = syn::parse2::<UnitAttribute>(tokens).err().unwrap();
        assert!(err.to_string().contains("missing required attribute `symbol`"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_ratio() {
        let tokens = quote! { symbol = "m" };
        let err = syn::parse2::<UnitAttribute>(tokens).err().unwrap();
        assert!(err.to_string().contains("missing required attribute `ratio`"));
    }

    #[test]
    fn test_parse_unit_attribute_unknown_field() {
        let tokens = quote! { symbol = "m", ratio = 1.0, plural = "metres" };
        let err = syn::parse2::<UnitAttribute>(tokens).err().unwrap();
        assert!(err.to_string().contains("unknown attribute `plural`"));
    }

    #[test]
    fn test_parse_empty_attribute() {
        let tokens = quote! {};
        let result: syn::Result<UnitAttribute> = syn::parse2(tokens);
        assert!(result.is_err());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Expansion
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_derive_unit_impl_basic() {
        let code = derive_unit_impl(length_family()).unwrap().to_string();
        assert!(code.contains("impl crate :: Unit for LengthUnit"));
        assert!(code.contains("const FAMILY : & 'static str = \"length\""));
        assert!(code.contains("const STANDARD : Self = LengthUnit :: Metre"));
        assert!(code.contains("crate :: Conversion :: scale (1000.0)"));
        assert!(code.contains(
            "crate :: System :: MillimetreGramSecondKelvin => :: core :: option :: Option :: Some (LengthUnit :: Millimetre)"
        ));
        assert!(code.contains("impl :: core :: str :: FromStr for LengthUnit"));
        assert!(code.contains("crate :: Registry < LengthUnit >"));
    }

    #[test]
    fn test_derive_unit_impl_affine() {
        let input: DeriveInput = parse_quote! {
            #[unit(family = "temperature", dimension = Dimension::TEMPERATURE, standard = Kelvin)]
            pub enum TemperatureUnit {
                #[unit(symbol = "K", ratio = 1.0)]
                Kelvin,
                #[unit(symbol = "°C", ratio = 1.0, offset = 273.15)]
                Celsius,
            }
        };
        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("crate :: Conversion :: affine (1.0 , 273.15)"));
    }

    #[test]
    fn test_derive_rejects_struct() {
        let input: DeriveInput = parse_quote! {
            #[unit(family = "length", dimension = Dimension::LENGTH, standard = Metre)]
            pub struct Metre;
        };
        let err = derive_unit_impl(input).err().unwrap();
        assert!(err.to_string().contains("only be derived for enums"));
    }

    #[test]
    fn test_derive_rejects_unknown_standard() {
        let input: DeriveInput = parse_quote! {
            #[unit(family = "length", dimension = Dimension::LENGTH, standard = Furlong)]
            pub enum LengthUnit {
                #[unit(symbol = "m", ratio = 1.0)]
                Metre,
            }
        };
        let err = derive_unit_impl(input).err().unwrap();
        assert!(err.to_string().contains("standard unit `Furlong`"));
    }

    #[test]
    fn test_derive_rejects_non_identity_standard() {
        let input: DeriveInput = parse_quote! {
            #[unit(family = "length", dimension = Dimension::LENGTH, standard = Kilometre)]
            pub enum LengthUnit {
                #[unit(symbol = "km", ratio = 1000.0)]
                Kilometre,
            }
        };
        let err = derive_unit_impl(input).err().unwrap();
        assert!(err.to_string().contains("must have `ratio = 1.0`"));
    }

    #[test]
    fn test_derive_rejects_duplicate_system() {
        let input: DeriveInput = parse_quote! {
            #[unit(family = "length", dimension = Dimension::LENGTH, standard = Metre)]
            pub enum LengthUnit {
                #[unit(symbol = "m", ratio = 1.0, systems = [MetreKilogramSecondKelvin])]
                Metre,
                #[unit(symbol = "mm", ratio = 0.001, systems = [MetreKilogramSecondKelvin])]
                Millimetre,
            }
        };
        let err = derive_unit_impl(input).err().unwrap();
        assert!(err
            .to_string()
            .contains("system `MetreKilogramSecondKelvin` is already mapped to `Metre`"));
    }

    #[test]
    fn test_derive_rejects_variant_fields() {
        let input: DeriveInput = parse_quote! {
            #[unit(family = "length", dimension = Dimension::LENGTH, standard = Metre)]
            pub enum LengthUnit {
                #[unit(symbol = "m", ratio = 1.0)]
                Metre(f64),
            }
        };
        let err = derive_unit_impl(input).err().unwrap();
        assert!(err.to_string().contains("cannot carry fields"));
    }

    #[test]
    fn test_derive_rejects_variant_without_attribute() {
        let input: DeriveInput = parse_quote! {
            #[unit(family = "length", dimension = Dimension::LENGTH, standard = Metre)]
            pub enum LengthUnit {
                #[unit(symbol = "m", ratio = 1.0)]
                Metre,
                Furlong,
            }
        };
        let err = derive_unit_impl(input).err().unwrap();
        assert!(err.to_string().contains("attribute on `Furlong`"));
        let code = err.to_compile_error().to_string();
        assert!(code.contains("compile_error"));
    }
}
