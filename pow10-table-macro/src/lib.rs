use pow10_table::{PowerTable, TableConfig};
use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{
    parse::{self, Parse, ParseStream},
    parse_macro_input, Ident, LitInt, Token, Visibility,
};

struct TableInput {
    vis: Visibility,
    name: Ident,
    min_exp: i32,
    max_exp: i32,
    bits: Option<u32>,
}

/// Parses an integer literal with an optional leading minus sign
fn parse_signed(input: ParseStream) -> syn::Result<i32> {
    let negative = input.peek(Token![-]);
    if negative {
        input.parse::<Token![-]>()?;
    }

    let lit: LitInt = input.parse()?;
    let value: i32 = lit.base10_parse()?;

    Ok(if negative { -value } else { value })
}

impl Parse for TableInput {
    fn parse(input: ParseStream) -> parse::Result<Self> {
        let vis = input.parse()?;
        let name = input.parse()?;
        let _com: Token![,] = input.parse()?;
        let min_exp = parse_signed(input)?;
        let _com: Token![,] = input.parse()?;
        let max_exp = parse_signed(input)?;

        let mut bits = None;
        if input.peek(Token![,]) {
            let _com: Token![,] = input.parse()?;

            if !input.is_empty() {
                let key: Ident = input.parse()?;
                if key != "bits" {
                    return Err(syn::Error::new(key.span(), "expected `bits = N`"));
                }
                let _eq: Token![=] = input.parse()?;
                let lit: LitInt = input.parse()?;
                bits = Some(lit.base10_parse()?);
            }
        }

        Ok(Self {
            vis,
            name,
            min_exp,
            max_exp,
            bits,
        })
    }
}

/// Called like `pow10_table!((pub) name, MIN_E, MAX_E)` or
/// `pow10_table!((pub) name, MIN_E, MAX_E, bits = N)`. Expands to a module `name` with
/// the constants `MIN_E`, `MAX_E` and `POWERS: ([u64; LEN], [i16; LEN])`, where entry
/// `e - MIN_E` of `POWERS` approximates `10^e`.
///
/// The table is generated and verified while compiling, any failure is a compile error
#[proc_macro]
pub fn pow10_table(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as TableInput);

    match generate_table_module(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn generate_table_module(input: TableInput) -> syn::Result<proc_macro2::TokenStream> {
    let TableInput {
        vis,
        name,
        min_exp,
        max_exp,
        bits,
    } = input;

    let config = TableConfig {
        min_exp,
        max_exp,
        bits: bits.unwrap_or(TableConfig::default().bits),
        ..Default::default()
    };
    let table = PowerTable::generate(&config)
        .map_err(|err| syn::Error::new(Span::call_site(), err.to_string()))?;

    // Both bounds were checked to fit in an i16 during generation
    let min_e = table.range().min() as i16;
    let max_e = table.range().max() as i16;
    let len = table.len();
    let significands = table.significands();
    let exponents = table.exponents();

    Ok(quote! {
        #vis mod #name {
            pub const MIN_E: i16 = #min_e;
            pub const MAX_E: i16 = #max_e;

            pub const POWERS: ([u64; #len], [i16; #len]) = (
                [
                    #(
                        #significands
                    ),*
                ],
                [
                    #(
                        #exponents
                    ),*
                ],
            );
        }
    })
}
