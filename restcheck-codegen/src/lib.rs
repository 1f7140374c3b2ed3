use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::format_ident;
use quote::quote;
use quote::quote_spanned;

/// Turns `fn name(ctx: &ApiContext) -> Result<(), E>` into a `#[test]`.
///
/// `#[api_test("GET /posts returns 200")]` builds the context with
/// `restcheck::ApiContext::setup`; `#[api_test("...", my_setup)]` uses `my_setup`
/// instead, which must return `Result<ApiContext, restcheck::Error>`.
#[proc_macro_attribute]
pub fn api_test(attrs: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as syn::ItemFn);
    let args = syn::parse_macro_input!(attrs as syn::AttributeArgs);

    if args.is_empty() || args.len() > 2 {
        return quote! {
            compile_error!("A display name and an optional setup function should be passed to the macro");
        }
        .into();
    }

    let display_name: String;

    if let syn::NestedMeta::Lit(syn::Lit::Str(parsed_display_name)) = &args[0] {
        display_name = parsed_display_name.value();
        if let Err(stream) = validate_display_name(&display_name, parsed_display_name.span()) {
            return stream.into();
        }
    } else {
        return quote! {
            compile_error!("The first argument should be a string literal!");
        }
        .into();
    }

    let setup_function = match args.get(1) {
        Some(syn::NestedMeta::Meta(syn::Meta::Path(function_path))) => quote! { #function_path },
        Some(_) => {
            return quote! {
                compile_error!("The second argument should be a setup function!");
            }
            .into();
        }
        None => quote! { ::restcheck::ApiContext::setup },
    };

    if input.sig.inputs.len() != 1 {
        return quote_spanned! {input.sig.ident.span()=>
            compile_error!("An api test takes exactly one argument: the context");
        }
        .into();
    }

    let attrs = &input.attrs;
    let vis = &input.vis;
    let test_name = &input.sig.ident;
    let body_name = format_ident!("__{}_body", test_name);

    let mut body_function = input.clone();
    body_function.attrs.clear();
    body_function.vis = syn::Visibility::Inherited;
    body_function.sig.ident = body_name.clone();

    let output = quote! {
        #[test]
        #(#attrs)*
        #vis fn #test_name() -> ::std::result::Result<(), ::restcheck::Error> {
            #body_function

            ::restcheck::logging::init();
            let __api_test_span = ::restcheck::tracing::info_span!("api_test", name = #display_name);
            let __api_test_guard = __api_test_span.enter();

            let __api_context = #setup_function()?;
            let __api_test_result = #body_name(&__api_context);

            match &__api_test_result {
                ::std::result::Result::Ok(_) => ::restcheck::tracing::info!("passed"),
                ::std::result::Result::Err(e) => ::restcheck::tracing::error!(error = %e, "failed"),
            }

            __api_test_result.map_err(::std::convert::Into::into)
        }
    };

    TokenStream::from(output)
}

fn validate_display_name(name: &str, span: Span) -> Result<(), proc_macro2::TokenStream> {
    if name.trim().is_empty() {
        return Err(quote_spanned! {span=>
            compile_error!("The display name shouldn't be empty!");
        });
    }

    Ok(())
}
